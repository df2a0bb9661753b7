//! Serialize-then-decode round trips over the conversion engine.

#[cfg(test)]
mod tests {
    use rustxero_record::{Record, Resource, Scalar};
    use rustxero_xml::{to_record, to_xml, walk};

    use crate::init_tracing;

    #[test]
    fn test_should_round_trip_scalar_and_nested_mapping_fields() {
        init_tracing();
        let descriptor = Resource::Contacts.descriptor();
        let original = Record::from([
            ("Name", Record::Scalar(Scalar::from("Acme"))),
            ("IsCustomer", Record::Scalar(Scalar::Bool(true))),
            (
                "Website",
                Record::Scalar(Scalar::from("https://acme.test")),
            ),
        ]);

        let xml = to_xml(&descriptor.singular_name, &original).expect("serializable");
        let decoded = to_record(&walk(&xml).expect("parseable"), &descriptor);

        let contact = decoded.get("Contact").expect("root field");
        assert_eq!(
            contact.get("Name").and_then(Record::as_scalar),
            Some(&Scalar::from("Acme"))
        );
        // The boolean field re-coerces to the same typed value.
        assert_eq!(
            contact.get("IsCustomer").and_then(Record::as_scalar),
            Some(&Scalar::Bool(true))
        );
        assert_eq!(
            contact.get("Website").and_then(Record::as_scalar),
            Some(&Scalar::from("https://acme.test"))
        );
    }

    #[test]
    fn test_should_round_trip_nested_mappings() {
        init_tracing();
        let descriptor = Resource::Invoices.descriptor();
        let original = Record::from([
            ("InvoiceNumber", Record::Scalar(Scalar::from("INV-1"))),
            (
                "Contact",
                Record::from([("Name", Record::Scalar(Scalar::from("Acme")))]),
            ),
        ]);

        let xml = to_xml(&descriptor.singular_name, &original).expect("serializable");
        let decoded = to_record(&walk(&xml).expect("parseable"), &descriptor);

        let name = decoded
            .get("Invoice")
            .and_then(|i| i.get("Contact"))
            .and_then(|c| c.get("Name"))
            .and_then(Record::as_scalar)
            .and_then(Scalar::as_str);
        assert_eq!(name, Some("Acme"));
    }

    #[test]
    fn test_should_round_trip_timestamp_fields_through_coercion() {
        init_tracing();
        let descriptor = Resource::Contacts.descriptor();
        // Whole seconds and fractional seconds must both survive the trip.
        for text in ["2020-06-15T08:00:00+00:00", "2020-06-15T08:00:00.113+00:00"] {
            let updated = chrono::DateTime::parse_from_rfc3339(text)
                .expect("valid")
                .with_timezone(&chrono::Utc);
            let original = Record::from([(
                "UpdatedDateUTC",
                Record::Scalar(Scalar::DateTime(updated)),
            )]);

            let xml = to_xml(&descriptor.singular_name, &original).expect("serializable");
            let decoded = to_record(&walk(&xml).expect("parseable"), &descriptor);

            assert_eq!(
                decoded
                    .get("Contact")
                    .and_then(|c| c.get("UpdatedDateUTC"))
                    .and_then(Record::as_scalar),
                Some(&Scalar::DateTime(updated)),
                "timestamp {text}"
            );
        }
    }

    #[test]
    fn test_should_round_trip_a_pluralized_collection() {
        init_tracing();
        let descriptor = Resource::Contacts.descriptor();
        let original = Record::from([
            ("Name", Record::Scalar(Scalar::from("Acme"))),
            (
                "Phones",
                Record::Sequence(vec![
                    Record::from([("PhoneNumber", Record::Scalar(Scalar::from("123")))]),
                    Record::from([("PhoneNumber", Record::Scalar(Scalar::from("456")))]),
                ]),
            ),
        ]);

        let xml = to_xml(&descriptor.singular_name, &original).expect("serializable");
        let decoded = to_record(&walk(&xml).expect("parseable"), &descriptor);

        // Phones > Phone is a multi-instance element, so decoding restores
        // the sequence shape even though Name precedes it.
        let phones = decoded
            .get("Contact")
            .and_then(|c| c.get("Phones"))
            .and_then(Record::as_sequence)
            .expect("phone sequence");
        assert_eq!(phones.len(), 2);
    }
}
