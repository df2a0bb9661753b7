//! Resource naming conventions: pluralization and multi-instance elements.
//!
//! The Xero API has no schema; whether a repeated child element is a
//! collection item is decided purely by name. Two tables drive that decision:
//! the fixed set of element names that always repeat, and the per-resource
//! singular name derived from the collection name.

/// Child element names that are always collection items, regardless of which
/// resource encloses them.
pub const MULTI_INSTANCE_ELEMENTS: &[&str] = &["LineItem", "Phone", "Address"];

/// Exceptions to the strip-one-trailing-`s` singularization rule.
///
/// Keyed by the (incorrect) stripped form. `"Addresses"` strips to
/// `"Addresse"`, which the table corrects to `"Address"`.
pub const PLURAL_EXCEPTIONS: &[(&str, &str)] = &[("Addresse", "Address")];

/// Derive the singular element name from a collection name.
///
/// Strips exactly one trailing `s` (if present), then applies
/// [`PLURAL_EXCEPTIONS`]. Names without a trailing `s` pass through
/// unchanged, which is what the API's sole uncountable resource
/// (`Organisation`) relies on.
#[must_use]
pub fn singularize(name: &str) -> String {
    let stripped = name.strip_suffix('s').unwrap_or(name);
    for (from, to) in PLURAL_EXCEPTIONS {
        if stripped == *from {
            return (*to).to_owned();
        }
    }
    stripped.to_owned()
}

/// Immutable per-resource naming metadata.
///
/// One descriptor exists per catalog entry, constructed once and shared by
/// the converter and the dispatcher for the lifetime of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// The collection element name, e.g. `"Invoices"`.
    pub collection_name: String,
    /// The derived singular name, e.g. `"Invoice"`.
    pub singular_name: String,
}

impl ResourceDescriptor {
    /// Build a descriptor from a collection name.
    #[must_use]
    pub fn new(collection_name: impl Into<String>) -> Self {
        let collection_name = collection_name.into();
        let singular_name = singularize(&collection_name);
        Self {
            collection_name,
            singular_name,
        }
    }

    /// Whether a repeated child element with this name forms a collection
    /// under this resource.
    #[must_use]
    pub fn is_collection_key(&self, key: &str) -> bool {
        MULTI_INSTANCE_ELEMENTS.contains(&key) || key == self.singular_name
    }
}

/// The fixed set of resources the API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Resource {
    /// Contacts resource.
    Contacts,
    /// Accounts resource.
    Accounts,
    /// CreditNotes resource.
    CreditNotes,
    /// Currencies resource.
    Currencies,
    /// Invoices resource.
    Invoices,
    /// Organisation resource (singleton).
    Organisation,
    /// Payments resource.
    Payments,
    /// TaxRates resource.
    TaxRates,
    /// TrackingCategories resource.
    TrackingCategories,
}

impl Resource {
    /// All catalog entries, in the order the API documents them.
    pub const ALL: &'static [Resource] = &[
        Self::Contacts,
        Self::Accounts,
        Self::CreditNotes,
        Self::Currencies,
        Self::Invoices,
        Self::Organisation,
        Self::Payments,
        Self::TaxRates,
        Self::TrackingCategories,
    ];

    /// The collection name used in URLs and response wrappers.
    #[must_use]
    pub fn collection_name(self) -> &'static str {
        match self {
            Self::Contacts => "Contacts",
            Self::Accounts => "Accounts",
            Self::CreditNotes => "CreditNotes",
            Self::Currencies => "Currencies",
            Self::Invoices => "Invoices",
            Self::Organisation => "Organisation",
            Self::Payments => "Payments",
            Self::TaxRates => "TaxRates",
            Self::TrackingCategories => "TrackingCategories",
        }
    }

    /// Position of this resource in [`Self::ALL`].
    ///
    /// Exhaustive on purpose: adding a catalog entry without extending
    /// [`Self::ALL`] must fail to compile rather than mis-dispatch.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Contacts => 0,
            Self::Accounts => 1,
            Self::CreditNotes => 2,
            Self::Currencies => 3,
            Self::Invoices => 4,
            Self::Organisation => 5,
            Self::Payments => 6,
            Self::TaxRates => 7,
            Self::TrackingCategories => 8,
        }
    }

    /// Build the naming descriptor for this resource.
    #[must_use]
    pub fn descriptor(self) -> ResourceDescriptor {
        ResourceDescriptor::new(self.collection_name())
    }
}
