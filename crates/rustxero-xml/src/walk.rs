//! The tree walker: parsed XML to the tagged-tree representation.

use quick_xml::Reader;
use quick_xml::events::{BytesRef, Event};
use rustxero_record::TaggedNode;

use crate::error::XmlError;

/// Walk an XML document into a tagged tree.
///
/// Returns a synthetic document node (empty tag) whose single child is the
/// document root element. Element order is preserved; entity and character
/// references are resolved into the surrounding text, and each element's
/// text is trimmed once when the element completes. No coercion or
/// collection decisions are made here.
///
/// # Errors
///
/// Returns `XmlError` if the XML is malformed, contains an unresolvable
/// entity reference, or has no root element.
pub fn walk(xml: &[u8]) -> Result<TaggedNode, XmlError> {
    let mut reader = Reader::from_reader(xml);

    let mut stack: Vec<TaggedNode> = Vec::new();
    let mut roots: Vec<TaggedNode> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                stack.push(TaggedNode::element(element_name(e.name().as_ref())?));
            }
            Event::Empty(e) => {
                let node = TaggedNode::element(element_name(e.name().as_ref())?);
                attach(&mut stack, &mut roots, node);
            }
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                append_text(&mut stack, &decoded);
            }
            Event::CData(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                append_text(&mut stack, &decoded);
            }
            Event::GeneralRef(e) => {
                append_text(&mut stack, &resolve_reference(&e)?);
            }
            Event::End(_) => {
                let node = stack.pop().ok_or_else(|| {
                    XmlError::UnexpectedElement("end tag without matching start".to_string())
                })?;
                attach(&mut stack, &mut roots, node);
            }
            Event::Eof => break,
            // Skip declaration, comments, processing instructions.
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(XmlError::UnexpectedElement(
            "unexpected EOF with unclosed elements".to_string(),
        ));
    }

    match roots.into_iter().next() {
        Some(root) => Ok(TaggedNode::document(root)),
        None => Err(XmlError::MissingElement("root element".to_string())),
    }
}

fn element_name(raw: &[u8]) -> Result<String, XmlError> {
    std::str::from_utf8(raw)
        .map(str::to_owned)
        .map_err(|e| XmlError::ParseError(e.to_string()))
}

/// Resolve one general reference into the text it stands for: character
/// references (`&#38;`, `&#x26;`) and the five predefined XML entities.
fn resolve_reference(reference: &BytesRef<'_>) -> Result<String, XmlError> {
    if let Some(ch) = reference
        .resolve_char_ref()
        .map_err(|err| XmlError::ParseError(err.to_string()))?
    {
        return Ok(ch.to_string());
    }

    let name = reference
        .decode()
        .map_err(|err| XmlError::ParseError(err.to_string()))?;
    let resolved = match name.as_ref() {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "apos" => "'",
        "quot" => "\"",
        other => {
            return Err(XmlError::ParseError(format!(
                "unresolvable entity reference: &{other};"
            )));
        }
    };
    Ok(resolved.to_owned())
}

/// Attach a completed node to its parent, or record it as a root.
///
/// The node's accumulated text is trimmed once here. Text interleaved with
/// element children is insignificant whitespace in this protocol and is
/// dropped.
fn attach(stack: &mut Vec<TaggedNode>, roots: &mut Vec<TaggedNode>, mut node: TaggedNode) {
    if let Some(text) = node.text.take() {
        let trimmed = text.trim();
        if node.children.is_empty() && !trimmed.is_empty() {
            node.text = Some(trimmed.to_owned());
        }
    }
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

/// Append a text fragment to the element currently being built.
///
/// Fragments are kept verbatim; trimming happens once per completed node so
/// whitespace around references survives. Text outside any element (between
/// the declaration and the root) is insignificant and dropped.
fn append_text(stack: &mut [TaggedNode], text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(node) = stack.last_mut() {
        match &mut node.text {
            Some(existing) => existing.push_str(text),
            None => node.text = Some(text.to_owned()),
        }
    }
}
