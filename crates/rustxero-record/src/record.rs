//! The decoded record value: a tagged union over scalar, mapping, and sequence.

use indexmap::IndexMap;

use crate::scalar::Scalar;

/// An ordered field map. Insertion order is preserved so a decoded record can
/// be serialized back in the order the service sent it.
pub type Mapping = IndexMap<String, Record>;

/// A decoded value from the Xero API.
///
/// The converter produces exactly one of three shapes for any element group:
/// a coerced leaf value, an ordered mapping of named fields, or a sequence of
/// records for a repeated collection element.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Record {
    /// A coerced leaf value.
    Scalar(Scalar),
    /// Named fields, in document order.
    Mapping(Mapping),
    /// A collection of sibling records.
    Sequence(Vec<Record>),
}

impl Record {
    /// An empty mapping.
    #[must_use]
    pub fn empty() -> Self {
        Self::Mapping(Mapping::new())
    }

    /// Returns true if this is a scalar.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Returns true if this is a mapping.
    #[must_use]
    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Returns true if this is a sequence.
    #[must_use]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns the scalar if this is a leaf.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the field map if this is a mapping.
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the items if this is a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Record]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a field by name, if this is a mapping.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.as_mapping().and_then(|m| m.get(key))
    }
}

impl From<Scalar> for Record {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<Mapping> for Record {
    fn from(m: Mapping) -> Self {
        Self::Mapping(m)
    }
}

impl From<Vec<Record>> for Record {
    fn from(items: Vec<Record>) -> Self {
        Self::Sequence(items)
    }
}

impl<const N: usize> From<[(&str, Record); N]> for Record {
    fn from(fields: [(&str, Record); N]) -> Self {
        Self::Mapping(
            fields
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v))
                .collect(),
        )
    }
}
