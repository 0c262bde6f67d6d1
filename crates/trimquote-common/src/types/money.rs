//! Currency helpers
//!
//! All arithmetic runs at full `Decimal` precision; amounts are only rounded
//! when they are exposed as line items.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places used for every reported amount
pub const CURRENCY_DP: u32 = 2;

/// Round half-up (away from zero) to cents
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as `$1234.50`
pub fn format_currency(amount: Decimal) -> String {
    format!("${}", format_amount(amount))
}

/// Format an amount with exactly two decimals and no symbol
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = round_currency(amount);
    rounded.rescale(CURRENCY_DP);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_currency(dec!(2.345)), dec!(2.35));
        assert_eq!(round_currency(dec!(2.344)), dec!(2.34));
        assert_eq!(round_currency(dec!(0.125)), dec!(0.13));
    }

    #[test]
    fn test_format_pads_to_cents() {
        assert_eq!(format_currency(dec!(168)), "$168.00");
        assert_eq!(format_currency(dec!(18.5)), "$18.50");
        assert_eq!(format_amount(dec!(39.0000)), "39.00");
    }
}
