//! Request construction for the four verbs.

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rustxero_client::{Criterion, ResponseEnvelope, Xero};
    use rustxero_record::{Record, Scalar};

    use crate::{ScriptedTransport, init_tracing, ok_xml};

    fn client_with_one_ok() -> Xero<ScriptedTransport> {
        init_tracing();
        Xero::new(ScriptedTransport::replying(vec![ok_xml("<Response/>")]))
    }

    #[test]
    fn test_should_address_fetch_by_id_under_the_collection() {
        let client = client_with_one_ok();
        client.contacts().get("abc-123").expect("ok");

        let request = client_transport(&client).last_request();
        assert_eq!(
            request.uri,
            "https://api.xero.com/api.xro/2.0/Contacts/abc-123"
        );
        assert_eq!(request.method.as_str(), "GET");
    }

    #[test]
    fn test_should_address_list_all_at_the_collection_root() {
        let client = client_with_one_ok();
        client.tax_rates().all().expect("ok");

        let request = client_transport(&client).last_request();
        assert_eq!(request.uri, "https://api.xero.com/api.xro/2.0/TaxRates");
        assert!(request.body.is_none());
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_should_percent_encode_the_where_clause() {
        let client = client_with_one_ok();
        client
            .contacts()
            .filter(&[
                ("Name", Criterion::from("Acme")),
                ("IsCustomer", Criterion::from(true)),
            ])
            .expect("ok");

        let request = client_transport(&client).last_request();
        assert_eq!(
            request.uri,
            "https://api.xero.com/api.xro/2.0/Contacts\
             ?where=Name%3D%3D%22Acme%22%26%26IsCustomer%3D%3Dtrue"
        );
    }

    #[test]
    fn test_should_turn_since_into_an_if_modified_since_header() {
        let client = client_with_one_ok();
        let since = chrono::Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        client
            .invoices()
            .filter(&[("Since", Criterion::from(since))])
            .expect("ok");

        let request = client_transport(&client).last_request();
        // No where clause remains once Since is extracted.
        assert_eq!(request.uri, "https://api.xero.com/api.xro/2.0/Invoices");
        assert_eq!(
            request.headers,
            vec![(
                "If-Modified-Since".to_owned(),
                "Wed, 01 Jan 2020 00:00:00 GMT".to_owned()
            )]
        );
    }

    #[test]
    fn test_should_post_saves_as_form_encoded_xml() {
        let client = client_with_one_ok();
        let invoice = Record::from([
            ("InvoiceNumber", Record::Scalar(Scalar::from("INV-1"))),
            ("Total", Record::Scalar(Scalar::from("10.00"))),
        ]);
        client.invoices().save(&invoice).expect("ok");

        let request = client_transport(&client).last_request();
        assert_eq!(request.method.as_str(), "POST");
        let body = String::from_utf8(request.body.expect("body")).expect("utf-8");
        let (key, xml) = form_urlencoded::parse(body.as_bytes())
            .next()
            .expect("one pair");
        assert_eq!(key, "xml");
        assert_eq!(
            xml,
            "<Invoice><InvoiceNumber>INV-1</InvoiceNumber><Total>10.00</Total></Invoice>"
        );
    }

    #[test]
    fn test_should_put_updates_with_a_batch_body() {
        let client = client_with_one_ok();
        let batch = Record::Sequence(vec![
            Record::from([("Name", Record::Scalar(Scalar::from("Acme")))]),
            Record::from([("Name", Record::Scalar(Scalar::from("Globex")))]),
        ]);
        client.contacts().update(&batch).expect("ok");

        let request = client_transport(&client).last_request();
        assert_eq!(request.method.as_str(), "PUT");
        let body = String::from_utf8(request.body.expect("body")).expect("utf-8");
        let (_, xml) = form_urlencoded::parse(body.as_bytes())
            .next()
            .expect("one pair");
        assert_eq!(
            xml,
            "<Contacts>\
             <Contact><Name>Acme</Name></Contact>\
             <Contact><Name>Globex</Name></Contact>\
             </Contacts>"
        );
    }

    #[test]
    fn test_should_return_pdf_bodies_untouched() {
        init_tracing();
        let pdf = b"%PDF-1.4 binary".to_vec();
        let client = Xero::new(ScriptedTransport::replying(vec![ResponseEnvelope::new(
            200,
            "application/pdf",
            pdf.clone(),
        )]));

        let payload = client.invoices().get("INV-1").expect("ok");
        assert_eq!(payload.as_binary(), Some(pdf.as_slice()));
        assert!(payload.as_record().is_none());
    }

    fn client_transport<'a>(client: &'a Xero<ScriptedTransport>) -> &'a ScriptedTransport {
        client.transport()
    }
}
