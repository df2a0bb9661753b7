//! Record value model, field coercion, and resource naming tables for rustxero.
//!
//! This crate holds the data model shared by the XML conversion layer and the
//! HTTP dispatch layer:
//!
//! - [`TaggedNode`]: the intermediate tagged-tree representation of a parsed
//!   XML document, prior to any semantic interpretation.
//! - [`Record`] and [`Scalar`]: the decoded, semantically-typed result of
//!   converting a tagged tree (scalar, ordered mapping, or sequence).
//! - [`coerce`] and the field classification tables that drive it.
//! - [`ResourceDescriptor`] and the singular/plural naming conventions the
//!   Xero API uses to distinguish collections from nested records.

mod naming;
mod node;
mod record;
mod scalar;

pub use naming::{
    MULTI_INSTANCE_ELEMENTS, PLURAL_EXCEPTIONS, Resource, ResourceDescriptor, singularize,
};
pub use node::TaggedNode;
pub use record::{Mapping, Record};
pub use scalar::{BOOLEAN_FIELDS, DATE_FIELDS, DATETIME_FIELDS, Scalar, coerce, coerce_scalar};
