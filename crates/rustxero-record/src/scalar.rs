//! Scalar values and the field coercion table.
//!
//! The Xero API carries every value as XML text; the only type information is
//! the element name. These tables classify the known typed fields, and
//! [`coerce`] turns the raw text into a [`Scalar`] accordingly. Any field not
//! listed stays a string.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Field names whose text is a boolean (`true`/`false`, case-insensitive).
pub const BOOLEAN_FIELDS: &[&str] = &["IsSupplier", "IsCustomer"];

/// Field names whose text is a full UTC timestamp.
pub const DATETIME_FIELDS: &[&str] = &["UpdatedDateUTC"];

/// Field names whose text is a calendar date (a timestamp truncated to its
/// date component). None of the current resources carry one, but the
/// classification exists so the coercion table stays total over the four
/// semantic types.
pub const DATE_FIELDS: &[&str] = &[];

/// A coerced leaf value.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// An uninterpreted string (the default for unclassified fields).
    Str(String),
    /// A boolean field.
    Bool(bool),
    /// A full timestamp field.
    DateTime(DateTime<Utc>),
    /// A calendar-date field.
    Date(NaiveDate),
}

impl Scalar {
    /// Returns the string if this is a string scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean scalar.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the timestamp if this is a datetime scalar.
    #[must_use]
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Returns the date if this is a date scalar.
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    /// The wire representation used when serializing back to XML: booleans as
    /// lowercase `true`/`false`, timestamps in the service's ISO 8601 form
    /// with fractional seconds kept when present, so a serialized timestamp
    /// re-coerces to the same instant.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }
}

/// Coerce raw element text into a [`Scalar`] according to the field tables.
///
/// Booleans map case-insensitively: `"true"` becomes `true`, anything else
/// becomes `false`. Timestamps are parsed as RFC 3339 first, then as the
/// service's naive `%Y-%m-%dT%H:%M:%S%.f` form; unparseable text stays a
/// string rather than failing the whole conversion.
#[must_use]
pub fn coerce(key: &str, text: &str) -> Scalar {
    if BOOLEAN_FIELDS.contains(&key) {
        return Scalar::Bool(text.eq_ignore_ascii_case("true"));
    }
    if DATETIME_FIELDS.contains(&key) {
        return match parse_timestamp(text) {
            Some(dt) => Scalar::DateTime(dt),
            None => Scalar::Str(text.to_owned()),
        };
    }
    if DATE_FIELDS.contains(&key) {
        return match parse_timestamp(text) {
            Some(dt) => Scalar::Date(dt.date_naive()),
            None => Scalar::Str(text.to_owned()),
        };
    }
    Scalar::Str(text.to_owned())
}

/// Coerce an existing scalar under the given key.
///
/// Only string scalars are re-interpreted; an already-typed value passes
/// through unchanged, so coercion is idempotent.
#[must_use]
pub fn coerce_scalar(key: &str, value: Scalar) -> Scalar {
    match value {
        Scalar::Str(s) => coerce(key, &s),
        other => other,
    }
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|ndt| ndt.and_utc())
                .ok()
        })
}
