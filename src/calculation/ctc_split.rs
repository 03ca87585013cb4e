//! Annual CTC to monthly salary structure conversion.
//!
//! When HR registers a salaried employee with only an annual cost-to-company
//! figure, the engine materializes a monthly salary structure from it using
//! the policy split fractions. The materialized structure is stored on the
//! profile and becomes the figure set every later computation reads.

use rust_decimal::Decimal;

use crate::calculation::rounding::round_to_paise;
use crate::config::PayPolicy;
use crate::models::SalaryStructure;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Splits an annual CTC into a monthly salary structure.
///
/// The monthly figure is `annual_ctc / 12` rounded to paise; each component
/// is its policy fraction of that monthly figure, rounded to paise
/// independently.
///
/// # Arguments
///
/// * `annual_ctc` - The annual cost-to-company figure
/// * `policy` - The pay policy supplying the split fractions
///
/// # Returns
///
/// The materialized [`SalaryStructure`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::split_annual_ctc;
/// use payroll_engine::config::PayPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = PayPolicy::default();
/// let salary = split_annual_ctc(Decimal::from_str("998400").unwrap(), &policy);
///
/// assert_eq!(salary.basic, Decimal::from_str("41600.00").unwrap());
/// assert_eq!(salary.hra, Decimal::from_str("24960.00").unwrap());
/// assert_eq!(salary.conveyance, Decimal::from_str("8320.00").unwrap());
/// assert_eq!(salary.other_allowances, Decimal::from_str("8320.00").unwrap());
/// ```
pub fn split_annual_ctc(annual_ctc: Decimal, policy: &PayPolicy) -> SalaryStructure {
    let monthly = round_to_paise(annual_ctc / MONTHS_PER_YEAR);
    let split = &policy.ctc_split;

    SalaryStructure {
        basic: round_to_paise(monthly * split.basic),
        hra: round_to_paise(monthly * split.hra),
        conveyance: round_to_paise(monthly * split.conveyance),
        other_allowances: round_to_paise(monthly * split.other),
    }
}
