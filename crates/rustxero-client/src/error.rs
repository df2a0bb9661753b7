//! The error taxonomy for API calls.
//!
//! Remote statuses map one-to-one onto error kinds; there are no retries at
//! any layer, and every error carries the original status code and raw body
//! for diagnostics. A call either fully succeeds or fully fails.

use rustxero_xml::XmlError;

use crate::request::ResponseEnvelope;
use crate::transport::TransportError;

/// Errors surfaced by an API operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The resource does not exist (404).
    #[error("not found ({status}): {body}")]
    NotFound {
        /// Original status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The service failed (500).
    #[error("server error ({status}): {body}")]
    ServerError {
        /// Original status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The request was rejected (400 or 401).
    #[error("bad request ({status}): {body}")]
    BadRequest {
        /// Original status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The operation is not implemented by the service (501).
    #[error("not implemented ({status}): {body}")]
    NotImplemented {
        /// Original status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Any other non-200 status.
    #[error("unexpected status {status}: {body}")]
    Unknown {
        /// Original status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A 200 response whose body was not parseable XML.
    #[error("malformed XML response (status {status}): {source}")]
    Parse {
        /// The underlying XML error.
        #[source]
        source: XmlError,
        /// Original status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A record could not be serialized for a persist operation.
    #[error("failed to serialize request body: {0}")]
    Serialize(#[from] XmlError),

    /// The transport failed before a response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    /// The remote status code, when the error came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { status, .. }
            | Self::ServerError { status, .. }
            | Self::BadRequest { status, .. }
            | Self::NotImplemented { status, .. }
            | Self::Unknown { status, .. }
            | Self::Parse { status, .. } => Some(*status),
            Self::Serialize(_) | Self::Transport(_) => None,
        }
    }

    /// The raw response body, when the error came from a response.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::NotFound { body, .. }
            | Self::ServerError { body, .. }
            | Self::BadRequest { body, .. }
            | Self::NotImplemented { body, .. }
            | Self::Unknown { body, .. }
            | Self::Parse { body, .. } => Some(body),
            Self::Serialize(_) | Self::Transport(_) => None,
        }
    }
}

/// Map a non-200 response onto its error kind.
pub(crate) fn classify(response: &ResponseEnvelope) -> Error {
    let status = response.status;
    let body = String::from_utf8_lossy(&response.body).into_owned();
    match status {
        404 => Error::NotFound { status, body },
        500 => Error::ServerError { status, body },
        400 | 401 => Error::BadRequest { status, body },
        501 => Error::NotImplemented { status, body },
        _ => Error::Unknown { status, body },
    }
}
