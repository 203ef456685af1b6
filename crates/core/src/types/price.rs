//! BRL price formatting using decimal arithmetic.
//!
//! Prices are carried as [`rust_decimal::Decimal`] everywhere; rounding to two
//! decimal places happens only here, at display time. The store's locale uses
//! a comma decimal separator and no thousands separator.

use rust_decimal::Decimal;

/// Format an amount the Brazilian way: two fixed decimals, comma separator.
///
/// Produces the bare amount without a currency symbol, e.g. `299,90`.
#[must_use]
pub fn brl_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2)).replace('.', ",")
}

/// Format an amount for display with the `R$` prefix, e.g. `R$ 299,90`.
#[must_use]
pub fn brl(amount: Decimal) -> String {
    format!("R$ {}", brl_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brl_amount_uses_comma() {
        assert_eq!(brl_amount(Decimal::new(29990, 2)), "299,90");
    }

    #[test]
    fn test_brl_amount_pads_to_two_decimals() {
        assert_eq!(brl_amount(Decimal::from(25)), "25,00");
        assert_eq!(brl_amount(Decimal::new(1005, 1)), "100,50");
    }

    #[test]
    fn test_brl_amount_rounds_beyond_two_decimals() {
        assert_eq!(brl_amount(Decimal::new(19999, 3)), "20,00");
    }

    #[test]
    fn test_brl_display() {
        assert_eq!(brl(Decimal::new(18990, 2)), "R$ 189,90");
    }

    #[test]
    fn test_brl_zero() {
        assert_eq!(brl(Decimal::ZERO), "R$ 0,00");
    }
}
