//! Per-resource operations: the four verbs and the shared response handler.

use http::Method;
use rustxero_record::{Record, ResourceDescriptor};
use rustxero_xml::{body_for_save, to_record, walk};
use tracing::debug;

use crate::config::XeroConfig;
use crate::error::{Error, classify};
use crate::query::{Criterion, build_filter};
use crate::request::RequestDescriptor;
use crate::transport::Transport;

/// A successful operation result.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Decoded records from an XML response body.
    Record(Record),
    /// The raw bytes of a binary (e.g. PDF) response, returned unprocessed.
    Binary(Vec<u8>),
}

impl Payload {
    /// The decoded record, if this was an XML response.
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            Self::Binary(_) => None,
        }
    }

    /// Consume into the decoded record, if this was an XML response.
    #[must_use]
    pub fn into_record(self) -> Option<Record> {
        match self {
            Self::Record(record) => Some(record),
            Self::Binary(_) => None,
        }
    }

    /// The raw bytes, if this was a binary response.
    #[must_use]
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(bytes) => Some(bytes),
            Self::Record(_) => None,
        }
    }
}

/// One catalog resource bound to a transport.
///
/// All four operations are a single blocking request-response cycle; there
/// are no retries and no state between calls.
#[derive(Debug)]
pub struct ResourceEndpoint<'a, T: Transport> {
    transport: &'a T,
    config: &'a XeroConfig,
    descriptor: &'a ResourceDescriptor,
}

impl<'a, T: Transport> ResourceEndpoint<'a, T> {
    pub(crate) fn new(
        transport: &'a T,
        config: &'a XeroConfig,
        descriptor: &'a ResourceDescriptor,
    ) -> Self {
        Self {
            transport,
            config,
            descriptor,
        }
    }

    /// The naming descriptor this endpoint dispatches with.
    #[must_use]
    pub fn descriptor(&self) -> &ResourceDescriptor {
        self.descriptor
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.config.api_url(),
            self.descriptor.collection_name
        )
    }

    /// Fetch one record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on any non-200 response or unparseable body.
    pub fn get(&self, id: &str) -> Result<Payload, Error> {
        let uri = format!("{}/{id}", self.collection_url());
        self.execute(RequestDescriptor::get(uri))
    }

    /// List every record of this resource.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on any non-200 response or unparseable body.
    pub fn all(&self) -> Result<Payload, Error> {
        self.execute(RequestDescriptor::get(self.collection_url()))
    }

    /// List records matching the criteria.
    ///
    /// Ordinary criteria become a `where=` query; a `Since` criterion is
    /// sent as an `If-Modified-Since` header instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on any non-200 response or unparseable body.
    pub fn filter(&self, criteria: &[(&str, Criterion)]) -> Result<Payload, Error> {
        let (where_clause, since_header) = build_filter(criteria);

        let mut uri = self.collection_url();
        if let Some(clause) = where_clause {
            uri.push_str("?where=");
            uri.push_str(&clause);
        }

        let mut request = RequestDescriptor::get(uri);
        if let Some((name, value)) = since_header {
            request = request.with_header(name, value);
        }
        self.execute(request)
    }

    /// Create records (POST).
    ///
    /// A sequence record persists as a batch; anything else as one record.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on any non-200 response or unparseable body.
    pub fn save(&self, record: &Record) -> Result<Payload, Error> {
        self.persist(record, Method::POST)
    }

    /// Update records (PUT).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on any non-200 response or unparseable body.
    pub fn update(&self, record: &Record) -> Result<Payload, Error> {
        self.persist(record, Method::PUT)
    }

    fn persist(&self, record: &Record, method: Method) -> Result<Payload, Error> {
        let xml = body_for_save(self.descriptor, record)?;
        let xml = String::from_utf8(xml)
            .map_err(|e| Error::Serialize(rustxero_xml::XmlError::ParseError(e.to_string())))?;

        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair("xml", &xml)
            .finish();

        let request = RequestDescriptor::new(method, self.collection_url())
            .with_body(body.into_bytes())
            .with_header(
                "Content-Type",
                "application/x-www-form-urlencoded; charset=utf-8",
            );
        self.execute(request)
    }

    /// The shared response handler: send, classify, decode.
    fn execute(&self, request: RequestDescriptor) -> Result<Payload, Error> {
        debug!(
            method = %request.method,
            uri = %request.uri,
            resource = %self.descriptor.collection_name,
            "dispatching request"
        );

        let response = self.transport.send(&request)?;

        if response.status != 200 {
            return Err(classify(&response));
        }

        if is_binary_document(&response.content_type) {
            return Ok(Payload::Binary(response.body));
        }

        let doc = walk(&response.body).map_err(|source| Error::Parse {
            source,
            status: response.status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
        })?;
        let decoded = to_record(&doc, self.descriptor);

        Ok(Payload::Record(self.extract_results(&decoded)))
    }

    /// Pull the resource's result out of the `Response` wrapper.
    ///
    /// A mapping keyed under the singular name is unwrapped one more level;
    /// anything else (a sequence, or a singleton resource whose fields sit
    /// directly under the collection name) is returned as-is. A response
    /// without the collection key yields an empty mapping.
    fn extract_results(&self, decoded: &Record) -> Record {
        let result = decoded
            .get("Response")
            .and_then(|r| r.get(&self.descriptor.collection_name));

        match result {
            Some(other) => match other.get(&self.descriptor.singular_name) {
                Some(inner) => inner.clone(),
                None => other.clone(),
            },
            None => {
                debug!(
                    resource = %self.descriptor.collection_name,
                    "response carries no result for this resource"
                );
                Record::empty()
            }
        }
    }
}

/// True when the response body is a binary document that must bypass XML
/// decoding entirely.
fn is_binary_document(content_type: &str) -> bool {
    content_type
        .parse::<mime::Mime>()
        .map(|m| m.type_() == mime::APPLICATION && m.subtype() == mime::PDF)
        .unwrap_or(false)
}
