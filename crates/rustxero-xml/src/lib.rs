//! XML conversion layer for rustxero.
//!
//! This crate implements both directions of the wire-format conversion:
//!
//! - [`walk`] parses an XML response body into the generic tagged tree
//!   ([`rustxero_record::TaggedNode`]), purely structural.
//! - [`to_record`] interprets a tagged tree as a [`rustxero_record::Record`],
//!   applying field coercion and the singular/plural collection heuristics.
//! - [`to_xml`] and [`body_for_save`] serialize a record back into the XML
//!   the service expects for write requests.
//!
//! The two directions deliberately do not share their collection heuristics:
//! decoding consults the resource descriptor and the multi-instance element
//! table, while encoding re-derives the decision from the key name alone.
//! See [`to_xml`] for the consequences.

mod convert;
mod error;
mod serialize;
mod walk;

pub use convert::to_record;
pub use error::XmlError;
pub use serialize::{body_for_save, to_xml};
pub use walk::walk;
