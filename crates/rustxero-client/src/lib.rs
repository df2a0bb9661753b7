//! Request dispatch, error classification, and the resource catalog for
//! rustxero.
//!
//! The entry point is [`Xero`], which binds a [`Transport`] implementation to
//! the fixed set of API resources. Each resource exposes four operations
//! (fetch by id, list all, filter, persist); every operation is one blocking
//! request-response cycle with no retries, and every non-200 response maps
//! onto the [`Error`] taxonomy carrying the original status and body.
//!
//! The core holds no shared mutable state: the per-resource descriptors are
//! built once at construction and only read afterwards, so a `Xero` value
//! can be shared across threads as long as its transport is.

mod catalog;
mod config;
mod endpoint;
mod error;
mod query;
mod request;
mod transport;

pub use catalog::Xero;
pub use config::XeroConfig;
pub use endpoint::{Payload, ResourceEndpoint};
pub use error::Error;
pub use query::Criterion;
pub use request::{RequestDescriptor, ResponseEnvelope};
pub use transport::{Transport, TransportError};

#[cfg(feature = "blocking-transport")]
pub use transport::blocking::BlockingTransport;
