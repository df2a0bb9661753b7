//! End-to-end tests for the rustxero client.
//!
//! Every test drives a real [`Xero`] client over a scripted in-memory
//! transport, so the full decode / dispatch / classification path is
//! exercised without a network.

use std::sync::{Mutex, Once};

use rustxero_client::{
    RequestDescriptor, ResponseEnvelope, Transport, TransportError, Xero,
};

mod test_dispatch;
mod test_errors;
mod test_roundtrip;
mod test_signing;

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A transport that replays scripted responses and records every request it
/// was handed.
pub struct ScriptedTransport {
    responses: Mutex<Vec<ResponseEnvelope>>,
    requests: Mutex<Vec<RequestDescriptor>>,
}

impl ScriptedTransport {
    /// A transport that will answer requests with the given responses, in
    /// order.
    #[must_use]
    pub fn replying(responses: Vec<ResponseEnvelope>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().rev().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// The most recent request sent through this transport.
    #[must_use]
    pub fn last_request(&self) -> RequestDescriptor {
        self.requests
            .lock()
            .expect("lock")
            .last()
            .expect("a request was sent")
            .clone()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: &RequestDescriptor) -> Result<ResponseEnvelope, TransportError> {
        self.requests.lock().expect("lock").push(request.clone());
        self.responses
            .lock()
            .expect("lock")
            .pop()
            .ok_or_else(|| TransportError::Http("script exhausted".to_owned()))
    }
}

/// A client wired to a transport that answers every request with the given
/// XML body.
#[must_use]
pub fn client_replying_xml(body: &str) -> Xero<ScriptedTransport> {
    init_tracing();
    Xero::new(ScriptedTransport::replying(vec![ok_xml(body)]))
}

/// A 200 response with an XML content type.
#[must_use]
pub fn ok_xml(body: &str) -> ResponseEnvelope {
    ResponseEnvelope::new(200, "text/xml; charset=utf-8", body)
}
