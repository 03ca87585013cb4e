//! Attendance aggregation over a date range.
//!
//! A pure fold over closed attendance records. Aggregation is restartable
//! over any sub-range: daily, weekly, and monthly views are all the same
//! fold with different bounds, and adjacent sub-ranges sum to the whole.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, AttendanceStatus, DateRange};

/// Accumulated hours and day counts for one employee over a range.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::AttendanceAggregate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let aggregate = AttendanceAggregate {
///     worked_hours: Decimal::from_str("45.0").unwrap(),
///     ot_hours: Decimal::from_str("2.5").unwrap(),
///     present_days: 5,
/// };
/// assert_eq!(aggregate.present_days, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceAggregate {
    /// Sum of regular hours over the range.
    pub worked_hours: Decimal,
    /// Sum of overtime hours over the range.
    pub ot_hours: Decimal,
    /// Count of records marked present. Half days and leave do not count.
    pub present_days: u32,
}

/// Folds attendance records inside an inclusive date range into an aggregate.
///
/// Records outside the range are skipped; records inside contribute their
/// regular and overtime hours, and those with status `present` contribute a
/// day to `present_days`. Record hours are already rounded, so the sums here
/// introduce no further rounding.
///
/// # Arguments
///
/// * `records` - The attendance records to fold, in any order
/// * `range` - The inclusive date range to aggregate over
///
/// # Returns
///
/// An [`AttendanceAggregate`] with summed hours and the present-day count.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::calculation::aggregate_hours;
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus, DateRange};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let records = vec![AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2023, 6, 5).unwrap(),
///     in_time: None,
///     out_time: None,
///     status: AttendanceStatus::Present,
///     worked_hours: Decimal::from_str("9.0").unwrap(),
///     ot_hours: Decimal::from_str("0.5").unwrap(),
/// }];
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
/// )
/// .unwrap();
///
/// let aggregate = aggregate_hours(&records, range);
/// assert_eq!(aggregate.worked_hours, Decimal::from_str("9.0").unwrap());
/// assert_eq!(aggregate.present_days, 1);
/// ```
pub fn aggregate_hours(records: &[AttendanceRecord], range: DateRange) -> AttendanceAggregate {
    let mut aggregate = AttendanceAggregate {
        worked_hours: Decimal::ZERO,
        ot_hours: Decimal::ZERO,
        present_days: 0,
    };

    for record in records.iter().filter(|r| range.contains(r.date)) {
        aggregate.worked_hours += record.worked_hours;
        aggregate.ot_hours += record.ot_hours;
        if record.status == AttendanceStatus::Present {
            aggregate.present_days += 1;
        }
    }

    aggregate
}
