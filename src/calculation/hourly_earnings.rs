//! Hourly wage earnings calculation.
//!
//! Hourly workers are paid per worked hour. Earnings land entirely in the
//! basic column of the breakdown; the allowance columns stay zero so the
//! output lines up with the salaried path column for column.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::rounding::round_to_paise;
use crate::config::PayPolicy;
use crate::models::EarningsBreakdown;

/// The basis on which an hourly worker is paid for a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HourlyBasis {
    /// Pay the hours actually accumulated from attendance.
    ActualHours {
        /// Regular hours worked over the month.
        worked_hours: Decimal,
        /// Overtime hours worked over the month.
        ot_hours: Decimal,
        /// Days marked present over the month.
        present_days: u32,
    },
    /// HR override: pay a flat day count at the nominal day length.
    DaysOverride {
        /// The day count HR supplied.
        days: Decimal,
    },
}

/// Calculates monthly earnings for an hourly worker.
///
/// On the actual-hours basis all payable hours (regular plus overtime) are
/// paid at the single hourly rate; overtime carries no premium multiplier.
/// On the days-override basis pay is `days x nominal day hours x rate`, with
/// no separate overtime credit.
///
/// # Arguments
///
/// * `hourly_rate` - The worker's hourly rate
/// * `basis` - Accumulated hours or the HR day-count override
/// * `policy` - The pay policy supplying the nominal day length
///
/// # Returns
///
/// An [`EarningsBreakdown`] with the pay in `basic` and zero allowances.
///
/// # Examples
///
/// ## Actual hours
///
/// ```
/// use payroll_engine::calculation::{calculate_hourly_earnings, HourlyBasis};
/// use payroll_engine::config::PayPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let basis = HourlyBasis::ActualHours {
///     worked_hours: Decimal::from_str("9.0").unwrap(),
///     ot_hours: Decimal::from_str("0.5").unwrap(),
///     present_days: 1,
/// };
/// let earnings = calculate_hourly_earnings(
///     Decimal::from_str("150").unwrap(),
///     &basis,
///     &PayPolicy::default(),
/// );
///
/// assert_eq!(earnings.gross_earnings, Decimal::from_str("1425.0").unwrap());
/// ```
///
/// ## Days override
///
/// ```
/// use payroll_engine::calculation::{calculate_hourly_earnings, HourlyBasis};
/// use payroll_engine::config::PayPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let basis = HourlyBasis::DaysOverride {
///     days: Decimal::from_str("26").unwrap(),
/// };
/// let earnings = calculate_hourly_earnings(
///     Decimal::from_str("150").unwrap(),
///     &basis,
///     &PayPolicy::default(),
/// );
///
/// assert_eq!(earnings.gross_earnings, Decimal::from_str("31200").unwrap());
/// ```
pub fn calculate_hourly_earnings(
    hourly_rate: Decimal,
    basis: &HourlyBasis,
    policy: &PayPolicy,
) -> EarningsBreakdown {
    let (days_worked, basic) = match basis {
        HourlyBasis::ActualHours {
            worked_hours,
            ot_hours,
            present_days,
        } => {
            let payable_hours = *worked_hours + *ot_hours;
            (
                Decimal::from(*present_days),
                round_to_paise(payable_hours * hourly_rate),
            )
        }
        HourlyBasis::DaysOverride { days } => (
            *days,
            round_to_paise(*days * policy.nominal_day_hours * hourly_rate),
        ),
    };

    let hra = Decimal::ZERO;
    let conveyance = Decimal::ZERO;
    let other_earnings = Decimal::ZERO;

    EarningsBreakdown {
        days_worked,
        basic,
        hra,
        conveyance,
        other_earnings,
        gross_earnings: basic + hra + conveyance + other_earnings,
    }
}
