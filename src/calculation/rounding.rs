//! Money rounding helpers shared by the earnings and deduction calculations.
//!
//! Earnings line items are kept at paise precision (two decimal places) and
//! statutory deduction line items at whole rupees. Both round midpoints away
//! from zero. Totals are never rounded again: they are exact sums of already
//! rounded line items.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a currency amount to paise (two decimal places).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_to_paise;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("32692.3076923").unwrap();
/// assert_eq!(round_to_paise(amount), Decimal::from_str("32692.31").unwrap());
/// ```
pub fn round_to_paise(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a currency amount to whole rupees.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_to_rupee;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("311.50").unwrap();
/// assert_eq!(round_to_rupee(amount), Decimal::from_str("312").unwrap());
/// ```
pub fn round_to_rupee(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_to_paise_truncating_case() {
        assert_eq!(round_to_paise(dec("10.124")), dec("10.12"));
    }

    #[test]
    fn test_round_to_paise_midpoint_rounds_away_from_zero() {
        assert_eq!(round_to_paise(dec("10.125")), dec("10.13"));
        assert_eq!(round_to_paise(dec("-10.125")), dec("-10.13"));
    }

    #[test]
    fn test_round_to_paise_leaves_two_dp_untouched() {
        assert_eq!(round_to_paise(dec("1425.00")), dec("1425.00"));
        assert_eq!(round_to_paise(dec("0.01")), dec("0.01"));
    }

    #[test]
    fn test_round_to_rupee_midpoint_rounds_away_from_zero() {
        assert_eq!(round_to_rupee(dec("311.50")), dec("312"));
        assert_eq!(round_to_rupee(dec("311.49")), dec("311"));
        assert_eq!(round_to_rupee(dec("-311.50")), dec("-312"));
    }

    #[test]
    fn test_round_to_rupee_whole_amount_unchanged() {
        assert_eq!(round_to_rupee(dec("2550")), dec("2550"));
    }
}
