//! Attendance records, session state, and date ranges.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Classification of a single attendance day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee worked the day.
    Present,
    /// The employee did not attend and took no leave.
    Absent,
    /// The employee was on approved leave.
    Leave,
    /// The employee worked a partial day.
    HalfDay,
}

/// One attendance row for an employee on a calendar day.
///
/// Hours are written by the ledger when a session closes (or by a manual
/// entry carrying both times); until then they stay zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this row belongs to.
    pub employee_id: String,
    /// The calendar day of the session.
    pub date: NaiveDate,
    /// Punch-in timestamp, if one was recorded.
    pub in_time: Option<NaiveDateTime>,
    /// Punch-out timestamp, if the session has closed.
    pub out_time: Option<NaiveDateTime>,
    /// Day classification.
    pub status: AttendanceStatus,
    /// Regular hours worked, at most the overtime threshold.
    pub worked_hours: Decimal,
    /// Hours beyond the overtime threshold.
    pub ot_hours: Decimal,
}

/// Explicit punch-session state for one employee.
///
/// The ledger maintains this transactionally on punch-in and punch-out; it is
/// never reconstructed by scanning for a latest open row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// No punch-in is pending a punch-out.
    NoOpenSession,
    /// A punch-in has been recorded and awaits its punch-out.
    Open {
        /// When the open session began.
        started_at: NaiveDateTime,
    },
}

impl SessionState {
    /// Returns true if a session is currently open.
    pub fn is_open(&self) -> bool {
        matches!(self, SessionState::Open { .. })
    }
}

/// A manual attendance correction supplied by HR.
///
/// Upserted per employee and date: the most recent record for the day is
/// overwritten, or a new one created. Hours are recomputed only when both
/// times are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualAttendanceEntry {
    /// The employee the entry is for.
    pub employee_id: String,
    /// The calendar day the entry covers.
    pub date: NaiveDate,
    /// Punch-in time, if HR supplies one.
    pub in_time: Option<NaiveDateTime>,
    /// Punch-out time, if HR supplies one.
    pub out_time: Option<NaiveDateTime>,
    /// Day classification to store.
    pub status: AttendanceStatus,
}

/// An inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range, inclusive.
    pub from: NaiveDate,
    /// Last day of the range, inclusive.
    pub to: NaiveDate,
}

impl DateRange {
    /// Creates a range after checking `from <= to`.
    ///
    /// # Arguments
    ///
    /// * `from` - First day, inclusive
    /// * `to` - Last day, inclusive
    ///
    /// # Returns
    ///
    /// The range, or `InvalidDateRange` when the bounds are reversed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use payroll_engine::models::DateRange;
    ///
    /// let from = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
    /// let to = NaiveDate::from_ymd_opt(2023, 6, 30).unwrap();
    /// let range = DateRange::new(from, to).unwrap();
    /// assert!(range.contains(NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()));
    /// ```
    pub fn new(from: NaiveDate, to: NaiveDate) -> EngineResult<Self> {
        if from > to {
            return Err(EngineError::InvalidDateRange {
                message: format!("Range start {} is after range end {}", from, to),
            });
        }
        Ok(DateRange { from, to })
    }

    /// Returns true if the date falls within the range, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_datetime(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_date_range_accepts_ordered_bounds() {
        let range = DateRange::new(make_date(2023, 6, 1), make_date(2023, 6, 30)).unwrap();
        assert_eq!(range.from, make_date(2023, 6, 1));
        assert_eq!(range.to, make_date(2023, 6, 30));
    }

    #[test]
    fn test_date_range_accepts_single_day() {
        let range = DateRange::new(make_date(2023, 6, 15), make_date(2023, 6, 15)).unwrap();
        assert!(range.contains(make_date(2023, 6, 15)));
    }

    #[test]
    fn test_date_range_rejects_reversed_bounds() {
        let result = DateRange::new(make_date(2023, 6, 30), make_date(2023, 6, 1));
        assert!(matches!(result, Err(EngineError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_date_range_contains_is_inclusive() {
        let range = DateRange::new(make_date(2023, 6, 1), make_date(2023, 6, 30)).unwrap();
        assert!(range.contains(make_date(2023, 6, 1)));
        assert!(range.contains(make_date(2023, 6, 30)));
        assert!(!range.contains(make_date(2023, 5, 31)));
        assert!(!range.contains(make_date(2023, 7, 1)));
    }

    #[test]
    fn test_session_state_is_open() {
        assert!(!SessionState::NoOpenSession.is_open());
        assert!(SessionState::Open {
            started_at: make_datetime(2023, 6, 5, 9, 0)
        }
        .is_open());
    }

    #[test]
    fn test_attendance_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            "\"present\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::HalfDay).unwrap(),
            "\"half_day\""
        );
    }

    #[test]
    fn test_session_state_serializes_tagged() {
        let open = SessionState::Open {
            started_at: make_datetime(2023, 6, 5, 9, 0),
        };
        let json = serde_json::to_value(&open).unwrap();
        assert_eq!(json["state"], "open");
        assert_eq!(json["started_at"], "2023-06-05T09:00:00");

        let closed = serde_json::to_value(SessionState::NoOpenSession).unwrap();
        assert_eq!(closed["state"], "no_open_session");
    }

    #[test]
    fn test_attendance_record_round_trip() {
        let record = AttendanceRecord {
            employee_id: "emp_001".to_string(),
            date: make_date(2023, 6, 5),
            in_time: Some(make_datetime(2023, 6, 5, 9, 0)),
            out_time: Some(make_datetime(2023, 6, 5, 18, 30)),
            status: AttendanceStatus::Present,
            worked_hours: Decimal::new(9, 0),
            ot_hours: Decimal::new(5, 1),
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: AttendanceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
