//! The client facade: one endpoint per catalog resource.

use rustxero_record::{Resource, ResourceDescriptor};

use crate::config::XeroConfig;
use crate::endpoint::ResourceEndpoint;
use crate::transport::Transport;

/// The API client.
///
/// Holds the transport, the configuration, and one immutable naming
/// descriptor per resource, all built once at construction. The client owns
/// no mutable state, so a shared reference can be used from any number of
/// threads.
#[derive(Debug)]
pub struct Xero<T: Transport> {
    transport: T,
    config: XeroConfig,
    descriptors: Vec<ResourceDescriptor>,
}

impl<T: Transport> Xero<T> {
    /// Build a client over the given transport with the default
    /// configuration.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, XeroConfig::default())
    }

    /// Build a client with an explicit configuration.
    #[must_use]
    pub fn with_config(transport: T, config: XeroConfig) -> Self {
        let descriptors = Resource::ALL.iter().map(|r| r.descriptor()).collect();
        Self {
            transport,
            config,
            descriptors,
        }
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The endpoint for an arbitrary catalog resource.
    #[must_use]
    pub fn endpoint(&self, resource: Resource) -> ResourceEndpoint<'_, T> {
        ResourceEndpoint::new(
            &self.transport,
            &self.config,
            &self.descriptors[resource.index()],
        )
    }

    /// The `Contacts` endpoint.
    #[must_use]
    pub fn contacts(&self) -> ResourceEndpoint<'_, T> {
        self.endpoint(Resource::Contacts)
    }

    /// The `Accounts` endpoint.
    #[must_use]
    pub fn accounts(&self) -> ResourceEndpoint<'_, T> {
        self.endpoint(Resource::Accounts)
    }

    /// The `CreditNotes` endpoint.
    #[must_use]
    pub fn credit_notes(&self) -> ResourceEndpoint<'_, T> {
        self.endpoint(Resource::CreditNotes)
    }

    /// The `Currencies` endpoint.
    #[must_use]
    pub fn currencies(&self) -> ResourceEndpoint<'_, T> {
        self.endpoint(Resource::Currencies)
    }

    /// The `Invoices` endpoint.
    #[must_use]
    pub fn invoices(&self) -> ResourceEndpoint<'_, T> {
        self.endpoint(Resource::Invoices)
    }

    /// The `Organisation` endpoint.
    #[must_use]
    pub fn organisation(&self) -> ResourceEndpoint<'_, T> {
        self.endpoint(Resource::Organisation)
    }

    /// The `Payments` endpoint.
    #[must_use]
    pub fn payments(&self) -> ResourceEndpoint<'_, T> {
        self.endpoint(Resource::Payments)
    }

    /// The `TaxRates` endpoint.
    #[must_use]
    pub fn tax_rates(&self) -> ResourceEndpoint<'_, T> {
        self.endpoint(Resource::TaxRates)
    }

    /// The `TrackingCategories` endpoint.
    #[must_use]
    pub fn tracking_categories(&self) -> ResourceEndpoint<'_, T> {
        self.endpoint(Resource::TrackingCategories)
    }
}
