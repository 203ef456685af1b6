//! Delivery choice, postal codes, and shipping fees.
//!
//! Shipping fees are flat per region (UF): the estimator resolves a CEP to a
//! region through the address lookup service and maps the region through a
//! fixed table. Regions without a dedicated rate fall back to a default fee.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the customer wants to receive the order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryChoice {
    /// Nothing chosen yet; checkout stays disabled.
    #[default]
    Unset,
    /// Ship to an address; requires a shipping quote.
    Ship,
    /// Pick up in store; no shipping data applies.
    Pickup,
}

/// Errors parsing a raw postal code input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PostalCodeError {
    /// After stripping non-digits the input did not have exactly 8 digits.
    #[error("postal code must have exactly 8 digits (got {0})")]
    InvalidLength(usize),
}

/// A normalized Brazilian postal code (CEP): exactly 8 digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostalCode(String);

impl PostalCode {
    /// Parse a raw user input, stripping any non-digit characters.
    ///
    /// # Errors
    ///
    /// Returns [`PostalCodeError::InvalidLength`] unless exactly 8 digits
    /// remain after stripping.
    pub fn parse(raw: &str) -> Result<Self, PostalCodeError> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != 8 {
            return Err(PostalCodeError::InvalidLength(digits.len()));
        }
        Ok(Self(digits))
    }

    /// The bare 8-digit string, as sent to the lookup service.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    /// Formats as `#####-###`, e.g. `01310-100`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, suffix) = self.0.split_at(5);
        write!(f, "{prefix}-{suffix}")
    }
}

/// Flat shipping fee in BRL for a region code (UF), case-insensitive.
#[must_use]
pub fn shipping_fee(region: &str) -> Decimal {
    match region.to_ascii_uppercase().as_str() {
        "SP" => Decimal::from(25),
        "RJ" => Decimal::from(40),
        "MG" => Decimal::from(20),
        "PR" => Decimal::from(48),
        "RS" => Decimal::from(57),
        "SC" => Decimal::from(60),
        _ => Decimal::from(22),
    }
}

/// A resolved shipping quote for a postal code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub postal_code: PostalCode,
    /// Region code (UF), e.g. `SP`.
    pub region: String,
    /// Locality name, e.g. `São Paulo`.
    pub locality: String,
    /// Flat fee derived from the region.
    pub fee: Decimal,
}

impl ShippingQuote {
    /// Build a quote, deriving the fee from the region.
    #[must_use]
    pub fn new(postal_code: PostalCode, region: String, locality: String) -> Self {
        let fee = shipping_fee(&region);
        Self {
            postal_code,
            region,
            locality,
            fee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postal_code_strips_non_digits() {
        let cep = PostalCode::parse("01310-100").unwrap();
        assert_eq!(cep.digits(), "01310100");
    }

    #[test]
    fn test_postal_code_display_reformats() {
        let cep = PostalCode::parse("01310100").unwrap();
        assert_eq!(cep.to_string(), "01310-100");
    }

    #[test]
    fn test_postal_code_too_short_is_rejected() {
        let err = PostalCode::parse("123").unwrap_err();
        assert_eq!(err, PostalCodeError::InvalidLength(3));
    }

    #[test]
    fn test_postal_code_too_long_is_rejected() {
        let err = PostalCode::parse("013101001").unwrap_err();
        assert_eq!(err, PostalCodeError::InvalidLength(9));
    }

    #[test]
    fn test_postal_code_letters_only_is_rejected() {
        assert!(PostalCode::parse("abcdefgh").is_err());
    }

    #[test]
    fn test_shipping_fee_table() {
        assert_eq!(shipping_fee("SP"), Decimal::from(25));
        assert_eq!(shipping_fee("RJ"), Decimal::from(40));
        assert_eq!(shipping_fee("MG"), Decimal::from(20));
        assert_eq!(shipping_fee("PR"), Decimal::from(48));
        assert_eq!(shipping_fee("RS"), Decimal::from(57));
        assert_eq!(shipping_fee("SC"), Decimal::from(60));
    }

    #[test]
    fn test_shipping_fee_is_case_insensitive() {
        assert_eq!(shipping_fee("sp"), Decimal::from(25));
        assert_eq!(shipping_fee("Rj"), Decimal::from(40));
    }

    #[test]
    fn test_shipping_fee_unknown_region_uses_default() {
        assert_eq!(shipping_fee("BA"), Decimal::from(22));
        assert_eq!(shipping_fee(""), Decimal::from(22));
    }

    #[test]
    fn test_quote_derives_fee_from_region() {
        let cep = PostalCode::parse("01310-100").unwrap();
        let quote = ShippingQuote::new(cep, "SP".to_string(), "São Paulo".to_string());
        assert_eq!(quote.fee, Decimal::from(25));
    }
}
