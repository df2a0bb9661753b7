//! Request and response envelopes exchanged with the transport.

use http::Method;

/// One HTTP request, built by the dispatcher and consumed once by the
/// transport.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// Full request URI, query string included.
    pub uri: String,
    /// One of GET / POST / PUT.
    pub method: Method,
    /// Request body, present for persist operations.
    pub body: Option<Vec<u8>>,
    /// Additional headers as name/value pairs.
    pub headers: Vec<(String, String)>,
}

impl RequestDescriptor {
    /// A request with the given method and URI, no body or headers.
    #[must_use]
    pub fn new(method: Method, uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            method,
            body: None,
            headers: Vec::new(),
        }
    }

    /// A GET request.
    #[must_use]
    pub fn get(uri: impl Into<String>) -> Self {
        Self::new(Method::GET, uri)
    }

    /// Attach a body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// The transport's view of one HTTP response, consumed once by the
/// dispatcher for classification.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    /// HTTP status code.
    pub status: u16,
    /// `Content-Type` header value, empty if absent.
    pub content_type: String,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl ResponseEnvelope {
    /// Build an envelope.
    #[must_use]
    pub fn new(status: u16, content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: content_type.into(),
            body: body.into(),
        }
    }
}
