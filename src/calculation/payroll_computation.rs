//! Monthly payroll orchestration.
//!
//! Ties the calculation pieces together for one employee and month: resolve
//! the pay basis from attendance or an HR override, run the matching
//! earnings path, apply deductions, and assemble the flat breakdown. The
//! whole computation is ephemeral; it reads the records it is handed and
//! touches no store.

use rust_decimal::Decimal;

use crate::calculation::deductions::calculate_deductions;
use crate::calculation::hour_accumulator::aggregate_hours;
use crate::calculation::hourly_earnings::{HourlyBasis, calculate_hourly_earnings};
use crate::calculation::salaried_earnings::calculate_salaried_earnings;
use crate::config::PayPolicy;
use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, Compensation, Employee, PayMonth, PayrollBreakdown, PayrollLineItems,
};

/// Computes the monthly payroll breakdown for an employee.
///
/// The pay basis resolves in this order: an HR `days_override` wins when
/// present; otherwise hourly workers are paid their aggregated actual hours
/// and salaried staff their aggregated present days. Records outside the
/// month are ignored.
///
/// # Arguments
///
/// * `employee` - The employee profile
/// * `records` - Attendance records to aggregate, in any order
/// * `month` - The pay month to compute
/// * `days_override` - Optional HR day-count override
/// * `policy` - The pay policy
///
/// # Returns
///
/// The flat [`PayrollBreakdown`] with server-computed totals.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_monthly_payroll;
/// use payroll_engine::config::PayPolicy;
/// use payroll_engine::models::{Compensation, Employee, PayMonth, StatutoryFlags};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Asha Verma".to_string(),
///     designation: "Technician".to_string(),
///     department: "Assembly".to_string(),
///     compensation: Compensation::Hourly {
///         hourly_rate: Decimal::from_str("150").unwrap(),
///     },
///     statutory: StatutoryFlags::default(),
///     advance_amount: Decimal::ZERO,
///     loan_amount: Decimal::ZERO,
/// };
/// let month = PayMonth::new(2023, 6).unwrap();
///
/// let breakdown = compute_monthly_payroll(
///     &employee,
///     &[],
///     month,
///     Some(Decimal::from_str("26").unwrap()),
///     &PayPolicy::default(),
/// )
/// .unwrap();
///
/// assert_eq!(breakdown.gross_earnings, Decimal::from_str("31200").unwrap());
/// ```
pub fn compute_monthly_payroll(
    employee: &Employee,
    records: &[AttendanceRecord],
    month: PayMonth,
    days_override: Option<Decimal>,
    policy: &PayPolicy,
) -> EngineResult<PayrollBreakdown> {
    let range = month.range()?;
    let aggregate = aggregate_hours(records, range);

    let earnings = match &employee.compensation {
        Compensation::Hourly { hourly_rate } => {
            let basis = match days_override {
                Some(days) => HourlyBasis::DaysOverride { days },
                None => HourlyBasis::ActualHours {
                    worked_hours: aggregate.worked_hours,
                    ot_hours: aggregate.ot_hours,
                    present_days: aggregate.present_days,
                },
            };
            calculate_hourly_earnings(*hourly_rate, &basis, policy)
        }
        Compensation::Salaried { salary } => {
            let days = days_override.unwrap_or_else(|| Decimal::from(aggregate.present_days));
            calculate_salaried_earnings(salary, days, policy)
        }
    };

    let deductions = calculate_deductions(&earnings, employee, policy);

    Ok(PayrollBreakdown::from_line_items(PayrollLineItems {
        days_worked: earnings.days_worked,
        basic: earnings.basic,
        hra: earnings.hra,
        conveyance: earnings.conveyance,
        other_earnings: earnings.other_earnings,
        pf: deductions.pf,
        esi: deductions.esi,
        advance: deductions.advance,
        tds: deductions.tds,
        other_deductions: deductions.other_deductions,
    }))
}
