//! Error type for XML walking and serialization.

use std::io;

/// Errors that can occur while parsing or writing XML.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// The document had no root element.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// The document structure was malformed (mismatched or unclosed tags).
    #[error("unexpected XML element: {0}")]
    UnexpectedElement(String),

    /// An error decoding element names or text content.
    #[error("failed to parse value: {0}")]
    ParseError(String),
}
