//! Statutory and manual deduction calculation.
//!
//! Provident fund applies to basic pay, ESI and TDS to gross earnings, each
//! gated by the employee's statutory flags and rounded to whole rupees as
//! statutory amounts are. The advance and the recurring loan instalment
//! pass through from the profile untouched.

use rust_decimal::Decimal;

use crate::calculation::rounding::round_to_rupee;
use crate::config::PayPolicy;
use crate::models::{DeductionsBreakdown, EarningsBreakdown, Employee};

/// Calculates the deductions for one month of earnings.
///
/// # Arguments
///
/// * `earnings` - The earnings the deductions are computed against
/// * `employee` - The profile supplying statutory flags and advance/loan amounts
/// * `policy` - The pay policy supplying the statutory rates
///
/// # Returns
///
/// A [`DeductionsBreakdown`] with each statutory line rounded to whole
/// rupees and the total as their exact sum.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_deductions;
/// use payroll_engine::config::PayPolicy;
/// use payroll_engine::models::{
///     Compensation, EarningsBreakdown, Employee, StatutoryFlags,
/// };
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let employee = Employee {
///     id: "emp_002".to_string(),
///     name: "Rahul Nair".to_string(),
///     designation: "Accounts Manager".to_string(),
///     department: "Finance".to_string(),
///     compensation: Compensation::Hourly { hourly_rate: dec("150") },
///     statutory: StatutoryFlags {
///         epfo_enabled: true,
///         esic_enabled: true,
///         tds_enabled: false,
///     },
///     advance_amount: Decimal::ZERO,
///     loan_amount: Decimal::ZERO,
/// };
/// let earnings = EarningsBreakdown {
///     days_worked: dec("13"),
///     basic: dec("21250"),
///     hra: dec("10625"),
///     conveyance: Decimal::ZERO,
///     other_earnings: dec("9725"),
///     gross_earnings: dec("41600"),
/// };
///
/// let deductions = calculate_deductions(&earnings, &employee, &PayPolicy::default());
///
/// assert_eq!(deductions.pf, dec("2550"));
/// assert_eq!(deductions.esi, dec("312"));
/// assert_eq!(deductions.total_deductions, dec("2862"));
/// ```
pub fn calculate_deductions(
    earnings: &EarningsBreakdown,
    employee: &Employee,
    policy: &PayPolicy,
) -> DeductionsBreakdown {
    let rates = &policy.statutory_rates;
    let flags = &employee.statutory;

    let pf = if flags.epfo_enabled {
        round_to_rupee(earnings.basic * rates.pf_rate)
    } else {
        Decimal::ZERO
    };

    let esi = if flags.esic_enabled {
        round_to_rupee(earnings.gross_earnings * rates.esi_rate)
    } else {
        Decimal::ZERO
    };

    let tds = if flags.tds_enabled {
        round_to_rupee(earnings.gross_earnings * rates.tds_rate)
    } else {
        Decimal::ZERO
    };

    let advance = employee.advance_amount;
    let other_deductions = employee.loan_amount;

    DeductionsBreakdown {
        pf,
        esi,
        advance,
        tds,
        other_deductions,
        total_deductions: pf + esi + advance + tds + other_deductions,
    }
}
