//! Filter criteria and `where=` query construction.

use chrono::{DateTime, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in the `where=` query value. Unreserved characters and
/// `/` pass through, everything else is percent-encoded.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// One filter criterion value.
///
/// Strings render quoted, booleans as bare `true`/`false`, timestamps in
/// ISO 8601 — matching the service's `where` expression grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// A quoted string literal.
    Str(String),
    /// A bare boolean literal.
    Bool(bool),
    /// An ISO 8601 timestamp literal.
    DateTime(DateTime<Utc>),
}

impl Criterion {
    /// Render the criterion as a `where` expression literal.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Str(s) => format!("\"{s}\""),
            Self::Bool(b) => (if *b { "true" } else { "false" }).to_owned(),
            Self::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }

    /// Render the criterion as an `If-Modified-Since` header value:
    /// RFC 1123 for timestamps, a quoted literal otherwise.
    #[must_use]
    pub fn render_since_header(&self) -> String {
        match self {
            Self::DateTime(dt) => dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
            other => format!("\"{}\"", other.render_bare()),
        }
    }

    fn render_bare(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Bool(b) => (if *b { "true" } else { "false" }).to_owned(),
            Self::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

impl From<&str> for Criterion {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Criterion {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for Criterion {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<DateTime<Utc>> for Criterion {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }
}

/// Build the filter query and headers from the criteria.
///
/// Returns the percent-encoded `where=` value (if any ordinary criteria
/// exist) and the `If-Modified-Since` header (if a `Since` criterion was
/// given). Ordinary criteria become `key==value` clauses joined with `&&`;
/// underscores in keys are rewritten to dots so nested fields can be
/// addressed (`Contact_Name` → `Contact.Name`).
pub(crate) fn build_filter(
    criteria: &[(&str, Criterion)],
) -> (Option<String>, Option<(String, String)>) {
    let mut since = None;
    let mut clauses = Vec::new();

    for (key, value) in criteria {
        if *key == "Since" {
            since = Some(("If-Modified-Since".to_owned(), value.render_since_header()));
            continue;
        }
        clauses.push(format!("{}=={}", key.replace('_', "."), value.render()));
    }

    let where_clause = if clauses.is_empty() {
        None
    } else {
        let joined = clauses.join("&&");
        Some(utf8_percent_encode(&joined, QUERY_ENCODE_SET).to_string())
    };

    (where_clause, since)
}
