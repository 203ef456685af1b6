//! ViaCEP address lookup client.
//!
//! Resolves an 8-digit CEP to its region (UF) and locality with a single
//! unauthenticated GET. The client sits behind the [`AddressLookup`] trait so
//! the shipping routes can be exercised with a fake instead of live network
//! calls.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::config::StorefrontConfig;

/// Errors that can occur when resolving a CEP.
///
/// "Not found" is kept distinct from transport and parse failures because the
/// user-facing messages differ: a missing CEP asks the user to re-check their
/// input, everything else asks them to retry later.
#[derive(Debug, Error)]
pub enum CepError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service reported the CEP as unknown.
    #[error("CEP not found: {0}")]
    NotFound(String),

    /// Response body did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A resolved address, as far as the storefront cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CepAddress {
    /// Region code (UF), e.g. `SP`.
    pub region: String,
    /// Locality name, e.g. `São Paulo`.
    pub locality: String,
}

/// Injectable address lookup collaborator.
#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Resolve an 8-digit CEP (digits only, already validated).
    async fn lookup(&self, digits: &str) -> Result<CepAddress, CepError>;
}

/// Client for the ViaCEP API.
#[derive(Clone)]
pub struct ViaCepClient {
    client: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    /// Create a new ViaCEP client.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.viacep_base_url.clone(),
        }
    }
}

/// Raw ViaCEP response.
///
/// On an unknown CEP the service answers 200 with `{"erro": true}` (older
/// deployments send the string `"true"`), so `erro` is kept loose and checked
/// for truthiness.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    erro: Option<serde_json::Value>,
    #[serde(default)]
    uf: Option<String>,
    #[serde(default)]
    localidade: Option<String>,
}

impl ViaCepResponse {
    fn is_not_found(&self) -> bool {
        self.erro.as_ref().is_some_and(|v| {
            v.as_bool().unwrap_or(false) || v.as_str().is_some_and(|s| s == "true")
        })
    }
}

#[async_trait]
impl AddressLookup for ViaCepClient {
    async fn lookup(&self, digits: &str) -> Result<CepAddress, CepError> {
        let url = format!("{}/{digits}/json/", self.base_url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CepError::Parse(format!(
                "HTTP {status}: {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        let parsed: ViaCepResponse =
            serde_json::from_str(&body).map_err(|e| CepError::Parse(e.to_string()))?;

        if parsed.is_not_found() {
            return Err(CepError::NotFound(digits.to_string()));
        }

        match (parsed.uf, parsed.localidade) {
            (Some(region), Some(locality)) => Ok(CepAddress { region, locality }),
            _ => Err(CepError::Parse(
                "response missing uf or localidade".to_string(),
            )),
        }
    }
}
