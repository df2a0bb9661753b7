//! The record-to-XML serializer: records back to the XML wire format.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use rustxero_record::{Record, ResourceDescriptor, singularize};

use crate::error::XmlError;

/// Serialize a record as an XML element tree rooted at `root_tag`.
///
/// The collection-vs-scalar decision is re-derived here purely from the
/// *current* key and value shape; it does not reuse the decoder's tables:
///
/// - a sequence under a key that does **not** end in `s` is a flat repeated
///   group, serialized into one element named `key`;
/// - a sequence under a key ending in `s` is a pluralized collection: each
///   item gets its own sub-element named by stripping the trailing `s` and
///   applying the plural-exception table.
///
/// This is asymmetric with decoding by design of the wire format: a resource
/// whose singular name itself ends in `s` would serialize with one extra `s`
/// stripped. No catalog resource currently hits that case.
///
/// # Errors
///
/// Returns `XmlError` if writing fails.
pub fn to_xml(root_tag: &str, record: &Record) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(256);
    let mut writer = Writer::new(&mut buf);
    write_element(&mut writer, root_tag, record)?;
    Ok(buf)
}

/// Build the XML body for a save operation.
///
/// A sequence (batch save) is wrapped in a root element named after the
/// resource's collection name with one sub-element per item named after the
/// singular name; a single record is wrapped directly under the singular
/// name.
///
/// # Errors
///
/// Returns `XmlError` if writing fails.
pub fn body_for_save(
    descriptor: &ResourceDescriptor,
    record: &Record,
) -> Result<Vec<u8>, XmlError> {
    match record {
        Record::Sequence(items) => {
            let mut buf = Vec::with_capacity(256);
            let mut writer = Writer::new(&mut buf);
            writer.write_event(Event::Start(BytesStart::new(
                descriptor.collection_name.as_str(),
            )))?;
            for item in items {
                write_element(&mut writer, &descriptor.singular_name, item)?;
            }
            writer.write_event(Event::End(BytesEnd::new(
                descriptor.collection_name.as_str(),
            )))?;
            Ok(buf)
        }
        _ => to_xml(&descriptor.singular_name, record),
    }
}

/// Write `<tag>…value…</tag>`.
fn write_element<W: Write>(writer: &mut Writer<W>, tag: &str, value: &Record) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    write_value(writer, value)?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write a record's content into the current element context.
fn write_value<W: Write>(writer: &mut Writer<W>, value: &Record) -> io::Result<()> {
    match value {
        Record::Scalar(s) => {
            writer.write_event(Event::Text(BytesText::new(&s.to_string())))?;
        }
        Record::Mapping(fields) => {
            for (key, field) in fields {
                write_field(writer, key, field)?;
            }
        }
        Record::Sequence(items) => {
            for item in items {
                write_value(writer, item)?;
            }
        }
    }
    Ok(())
}

/// Write one field of a mapping, applying the key-driven collection rules.
fn write_field<W: Write>(writer: &mut Writer<W>, key: &str, value: &Record) -> io::Result<()> {
    match value {
        Record::Sequence(items) => {
            writer.write_event(Event::Start(BytesStart::new(key)))?;
            if key.ends_with('s') {
                let singular = singularize(key);
                for item in items {
                    write_element(writer, &singular, item)?;
                }
            } else {
                // Flat repeated group: every item's fields land in the same
                // element, with no per-item wrapper.
                for item in items {
                    write_value(writer, item)?;
                }
            }
            writer.write_event(Event::End(BytesEnd::new(key)))?;
            Ok(())
        }
        _ => write_element(writer, key, value),
    }
}
