//! Integration test support for the CIALU storefront.
//!
//! Spins up the real application on an ephemeral port with a fake CEP lookup
//! in place of the live ViaCEP client, and hands out a cookie-carrying HTTP
//! client so tests exercise the session-backed cart exactly as a browser
//! would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cialu-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::expect_used)]

use std::sync::Arc;

use async_trait::async_trait;
use cialu_storefront::config::StorefrontConfig;
use cialu_storefront::services::cep::{AddressLookup, CepAddress, CepError};
use cialu_storefront::state::AppState;

/// CEP the fake lookup reports as unknown.
pub const CEP_NOT_FOUND: &str = "99999999";

/// CEP for which the fake lookup fails like a network outage.
pub const CEP_UNREACHABLE: &str = "88888888";

/// Deterministic in-process stand-in for ViaCEP.
pub struct FakeLookup;

#[async_trait]
impl AddressLookup for FakeLookup {
    async fn lookup(&self, digits: &str) -> Result<CepAddress, CepError> {
        match digits {
            "01310100" => Ok(CepAddress {
                region: "SP".to_string(),
                locality: "São Paulo".to_string(),
            }),
            "20040020" => Ok(CepAddress {
                region: "RJ".to_string(),
                locality: "Rio de Janeiro".to_string(),
            }),
            "89010000" => Ok(CepAddress {
                region: "SC".to_string(),
                locality: "Blumenau".to_string(),
            }),
            "70040010" => Ok(CepAddress {
                region: "DF".to_string(),
                locality: "Brasília".to_string(),
            }),
            CEP_NOT_FOUND => Err(CepError::NotFound(digits.to_string())),
            _ => Err(CepError::Parse("simulated transport failure".to_string())),
        }
    }
}

/// A running storefront instance bound to an ephemeral port.
pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the storefront with the fake CEP lookup.
    ///
    /// # Panics
    ///
    /// Panics if the listener or the HTTP client cannot be created.
    pub async fn spawn() -> Self {
        let config = StorefrontConfig::default();
        let state = AppState::with_lookup(config, Arc::new(FakeLookup));
        let app = cialu_storefront::app(state, "../storefront/static");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind ephemeral port");
        let addr = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server exited");
        });

        // Redirects are not followed so tests can assert on Location headers
        // (the checkout redirect points at wa.me).
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: format!("http://{addr}"),
            client,
        }
    }

    /// Absolute URL for a path on the test instance.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET a path.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// POST a form to a path.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }

    /// Add a product to the cart, asserting success.
    ///
    /// # Panics
    ///
    /// Panics if the add is rejected.
    pub async fn add_to_cart(&self, product_id: &str, size: &str, quantity: &str) {
        let resp = self
            .post_form(
                "/cart/add",
                &[
                    ("product_id", product_id),
                    ("size", size),
                    ("quantity", quantity),
                ],
            )
            .await;
        assert!(
            resp.status().is_success(),
            "add to cart failed: {}",
            resp.status()
        );
    }
}
