//! Application state shared across handlers.

use std::sync::Arc;

use cialu_core::Catalog;

use crate::config::StorefrontConfig;
use crate::services::cep::{AddressLookup, ViaCepClient};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the seeded catalog, and the address lookup collaborator.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    lookup: Arc<dyn AddressLookup>,
}

impl AppState {
    /// Create the application state with the live ViaCEP client.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let lookup = Arc::new(ViaCepClient::new(&config));
        Self::with_lookup(config, lookup)
    }

    /// Create the application state with an injected address lookup.
    ///
    /// Used by tests to swap in a fake collaborator.
    #[must_use]
    pub fn with_lookup(config: StorefrontConfig, lookup: Arc<dyn AddressLookup>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::default(),
                lookup,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the address lookup service.
    #[must_use]
    pub fn lookup(&self) -> &dyn AddressLookup {
        self.inner.lookup.as_ref()
    }
}
