//! The transport boundary.
//!
//! The core never performs I/O itself: it hands a [`RequestDescriptor`] to a
//! [`Transport`] and classifies the [`ResponseEnvelope`] it gets back. The
//! transport performs request signing transparently and owns all timeout and
//! connection concerns.

use crate::request::{RequestDescriptor, ResponseEnvelope};

/// Errors from the transport boundary.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP round trip failed before a response was received.
    #[error("HTTP transport failure: {0}")]
    Http(String),

    /// Request signing failed.
    #[error(transparent)]
    Auth(#[from] rustxero_auth::AuthError),
}

/// An opaque synchronous HTTP transport.
///
/// One call maps to one request-response cycle. Implementations must be safe
/// to call from multiple threads; the dispatcher itself holds no shared
/// mutable state.
pub trait Transport: Send + Sync {
    /// Execute the request and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if signing or the round trip fails.
    fn send(&self, request: &RequestDescriptor) -> Result<ResponseEnvelope, TransportError>;
}

#[cfg(feature = "blocking-transport")]
pub mod blocking {
    //! A blocking transport over reqwest, signing each request with OAuth1.

    use rustxero_auth::{SignatureMethod, sign_request};
    use tracing::debug;

    use super::{Transport, TransportError};
    use crate::request::{RequestDescriptor, ResponseEnvelope};

    /// A blocking HTTP transport that attaches the OAuth1 `Authorization`
    /// header to every request.
    #[derive(Debug)]
    pub struct BlockingTransport<M> {
        client: reqwest::blocking::Client,
        consumer_key: String,
        signature_method: M,
    }

    impl<M: SignatureMethod> BlockingTransport<M> {
        /// Build a transport from the consumer key and a signature method.
        #[must_use]
        pub fn new(consumer_key: impl Into<String>, signature_method: M) -> Self {
            Self {
                client: reqwest::blocking::Client::new(),
                consumer_key: consumer_key.into(),
                signature_method,
            }
        }
    }

    impl<M: SignatureMethod + Send + Sync> Transport for BlockingTransport<M> {
        fn send(&self, request: &RequestDescriptor) -> Result<ResponseEnvelope, TransportError> {
            let (url, query_params) = split_query(&request.uri);
            let authorization = sign_request(
                request.method.as_str(),
                url,
                &query_params,
                &self.consumer_key,
                &self.signature_method,
            )?;

            let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
                .map_err(|e| TransportError::Http(e.to_string()))?;

            let mut builder = self
                .client
                .request(method, &request.uri)
                .header("Authorization", authorization);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = &request.body {
                builder = builder.body(body.clone());
            }

            debug!(method = %request.method, uri = %request.uri, "sending signed request");

            let response = builder
                .send()
                .map_err(|e| TransportError::Http(e.to_string()))?;

            let status = response.status().as_u16();
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_owned();
            let body = response
                .bytes()
                .map_err(|e| TransportError::Http(e.to_string()))?
                .to_vec();

            Ok(ResponseEnvelope::new(status, content_type, body))
        }
    }

    /// Split a URI into its base URL and decoded query parameters, as the
    /// signing base requires.
    fn split_query(uri: &str) -> (&str, Vec<(String, String)>) {
        match uri.split_once('?') {
            Some((base, query)) => {
                let params = form_urlencoded::parse(query.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect();
                (base, params)
            }
            None => (uri, Vec::new()),
        }
    }

}
