//! Salaried wage earnings calculation.
//!
//! Salaried staff are paid their monthly structure prorated by days worked
//! against the standard payroll month. Each salary line is prorated and
//! rounded on its own; gross is the exact sum of the rounded lines.

use rust_decimal::Decimal;

use crate::calculation::rounding::round_to_paise;
use crate::config::PayPolicy;
use crate::models::{EarningsBreakdown, SalaryStructure};

/// Calculates monthly earnings for a salaried employee.
///
/// The proration ratio is `days_worked / standard_month_days`. A full month
/// of days reproduces the salary structure exactly; more days than the
/// standard month scale pay above it (no clamping).
///
/// # Arguments
///
/// * `salary` - The employee's monthly salary structure
/// * `days_worked` - Days worked in the pay month
/// * `policy` - The pay policy supplying the standard month length
///
/// # Returns
///
/// An [`EarningsBreakdown`] with each salary line prorated and rounded to
/// paise, and gross as their exact sum.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_salaried_earnings;
/// use payroll_engine::config::PayPolicy;
/// use payroll_engine::models::SalaryStructure;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = SalaryStructure {
///     basic: Decimal::from_str("42500").unwrap(),
///     hra: Decimal::from_str("21250").unwrap(),
///     conveyance: Decimal::ZERO,
///     other_allowances: Decimal::from_str("19450").unwrap(),
/// };
///
/// let earnings = calculate_salaried_earnings(
///     &salary,
///     Decimal::from_str("13").unwrap(),
///     &PayPolicy::default(),
/// );
///
/// assert_eq!(earnings.basic, Decimal::from_str("21250.00").unwrap());
/// assert_eq!(earnings.hra, Decimal::from_str("10625.00").unwrap());
/// assert_eq!(earnings.other_earnings, Decimal::from_str("9725.00").unwrap());
/// assert_eq!(earnings.gross_earnings, Decimal::from_str("41600.00").unwrap());
/// ```
pub fn calculate_salaried_earnings(
    salary: &SalaryStructure,
    days_worked: Decimal,
    policy: &PayPolicy,
) -> EarningsBreakdown {
    let ratio = days_worked / policy.standard_month_days;

    let basic = round_to_paise(salary.basic * ratio);
    let hra = round_to_paise(salary.hra * ratio);
    let conveyance = round_to_paise(salary.conveyance * ratio);
    let other_earnings = round_to_paise(salary.other_allowances * ratio);

    EarningsBreakdown {
        days_worked,
        basic,
        hra,
        conveyance,
        other_earnings,
        gross_earnings: basic + hra + conveyance + other_earnings,
    }
}
