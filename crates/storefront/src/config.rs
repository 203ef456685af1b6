//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CIALU_HOST` - Bind address (default: 127.0.0.1)
//! - `CIALU_PORT` - Listen port (default: 3000)
//! - `CIALU_BASE_URL` - Public URL for the storefront (default: http://localhost:3000)
//! - `CIALU_WHATSAPP_NUMBER` - Destination number for the checkout deep link
//! - `VIACEP_BASE_URL` - Address lookup service base URL (default: https://viacep.com.br/ws)
//!
//! There are no secrets: the WhatsApp number is public and the ViaCEP API is
//! unauthenticated.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// WhatsApp number the checkout message is sent to (digits only,
    /// country code included)
    pub whatsapp_number: String,
    /// Base URL of the ViaCEP address lookup service
    pub viacep_base_url: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("CIALU_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CIALU_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("CIALU_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("CIALU_PORT".to_string(), e.to_string()))?;

        let base_url = get_env_or_default("CIALU_BASE_URL", "http://localhost:3000");
        Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("CIALU_BASE_URL".to_string(), e.to_string()))?;

        let whatsapp_number = get_env_or_default("CIALU_WHATSAPP_NUMBER", "5547996224032");
        if !whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidEnvVar(
                "CIALU_WHATSAPP_NUMBER".to_string(),
                "must contain digits only".to_string(),
            ));
        }

        let viacep_base_url = get_env_or_default("VIACEP_BASE_URL", "https://viacep.com.br/ws");
        Url::parse(&viacep_base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("VIACEP_BASE_URL".to_string(), e.to_string())
        })?;

        Ok(Self {
            host,
            port,
            base_url,
            whatsapp_number,
            viacep_base_url,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for StorefrontConfig {
    /// Localhost defaults, used by tests that bypass the environment.
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            whatsapp_number: "5547996224032".to_string(),
            viacep_base_url: "https://viacep.com.br/ws".to_string(),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
