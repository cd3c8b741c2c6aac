//! Price formatting for the storefront's displayed amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Render an amount with exactly two decimal places, e.g. `$110.73`.
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{symbol}{rounded:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_to_two_places() {
        assert_eq!(format_amount(Decimal::new(325, 1), "$"), "$32.50");
        assert_eq!(format_amount(Decimal::from(22), "$"), "$22.00");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_amount(Decimal::new(10005, 3), "€"), "€10.01");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_amount(Decimal::ZERO, "$"), "$0.00");
    }
}
