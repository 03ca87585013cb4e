//! The in-memory attendance ledger and punch-session state machine.
//!
//! Each employee owns one entry holding their records and an explicit
//! open-session marker. Entries live behind their own lock inside a shared
//! map, so punches for one employee are serialized while punches for
//! different employees proceed in parallel.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tokio::sync::{Mutex, RwLock};

use crate::calculation::{hours_between, split_overtime};
use crate::config::PayPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, AttendanceStatus, DateRange, ManualAttendanceEntry, SessionState,
};

/// The open punch session for one employee.
#[derive(Debug, Clone, Copy)]
struct OpenSession {
    /// Index of the session's record in the employee's record list.
    index: usize,
    /// When the session began.
    started_at: NaiveDateTime,
}

/// All attendance state for one employee.
#[derive(Debug, Default)]
struct EmployeeAttendance {
    /// Records in creation order. Records are overwritten in place by manual
    /// entries but never removed, so session indices stay valid.
    records: Vec<AttendanceRecord>,
    /// The open session, if a punch-in awaits its punch-out.
    open_session: Option<OpenSession>,
}

/// In-memory attendance ledger keyed by employee.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::store::AttendanceLedger;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let ledger = AttendanceLedger::new();
/// let start = NaiveDate::from_ymd_opt(2023, 6, 5)
///     .unwrap()
///     .and_hms_opt(9, 0, 0)
///     .unwrap();
///
/// ledger.punch_in("emp_001", start).await.unwrap();
/// assert!(ledger.session_state("emp_001").await.is_open());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct AttendanceLedger {
    employees: RwLock<HashMap<String, Arc<Mutex<EmployeeAttendance>>>>,
}

impl AttendanceLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry for an employee, creating it when absent.
    async fn entry(&self, employee_id: &str) -> Arc<Mutex<EmployeeAttendance>> {
        if let Some(found) = self.employees.read().await.get(employee_id) {
            return Arc::clone(found);
        }

        let mut map = self.employees.write().await;
        Arc::clone(map.entry(employee_id.to_string()).or_default())
    }

    /// Returns the entry for an employee without creating one.
    async fn find(&self, employee_id: &str) -> Option<Arc<Mutex<EmployeeAttendance>>> {
        self.employees.read().await.get(employee_id).map(Arc::clone)
    }

    /// Opens a punch session for the employee.
    ///
    /// Creates a new present record dated from `now`, anchors the session to
    /// it, and returns the record.
    ///
    /// # Errors
    ///
    /// `AlreadyPunchedIn` when a session is already open.
    pub async fn punch_in(
        &self,
        employee_id: &str,
        now: NaiveDateTime,
    ) -> EngineResult<AttendanceRecord> {
        let entry = self.entry(employee_id).await;
        let mut state = entry.lock().await;

        if let Some(session) = state.open_session {
            return Err(EngineError::AlreadyPunchedIn {
                employee_id: employee_id.to_string(),
                started_at: session.started_at,
            });
        }

        let record = AttendanceRecord {
            employee_id: employee_id.to_string(),
            date: now.date(),
            in_time: Some(now),
            out_time: None,
            status: AttendanceStatus::Present,
            worked_hours: Decimal::ZERO,
            ot_hours: Decimal::ZERO,
        };

        state.records.push(record.clone());
        state.open_session = Some(OpenSession {
            index: state.records.len() - 1,
            started_at: now,
        });

        Ok(record)
    }

    /// Closes the open punch session for the employee.
    ///
    /// Derives the session duration, splits it into regular and overtime
    /// hours at the policy threshold, writes both onto the session's record,
    /// clears the session, and returns the closed record.
    ///
    /// # Errors
    ///
    /// `NoActiveSession` when no session is open; `InvalidDateRange` when
    /// `now` precedes the session's punch-in (the session stays open).
    pub async fn punch_out(
        &self,
        employee_id: &str,
        now: NaiveDateTime,
        policy: &PayPolicy,
    ) -> EngineResult<AttendanceRecord> {
        let entry = self.entry(employee_id).await;
        let mut state = entry.lock().await;

        let session = state
            .open_session
            .ok_or_else(|| EngineError::NoActiveSession {
                employee_id: employee_id.to_string(),
            })?;

        if now < session.started_at {
            return Err(EngineError::InvalidDateRange {
                message: format!(
                    "Punch-out {} precedes punch-in {}",
                    now, session.started_at
                ),
            });
        }

        let duration = hours_between(session.started_at, now);
        let split = split_overtime(duration, policy.ot_threshold_hours);

        let Some(record) = state.records.get_mut(session.index) else {
            state.open_session = None;
            return Err(EngineError::NoActiveSession {
                employee_id: employee_id.to_string(),
            });
        };

        record.out_time = Some(now);
        record.worked_hours = split.regular_hours;
        record.ot_hours = split.ot_hours;
        let closed = record.clone();

        state.open_session = None;
        Ok(closed)
    }

    /// Upserts a manual attendance entry for an employee and date.
    ///
    /// The most recent record for the entry's date is overwritten, or a new
    /// record created. When both times are present the hours are recomputed
    /// through the overtime split; otherwise they stay zero and the status
    /// is stored as given. The operation never opens a punch session; it
    /// keeps an existing session anchored only while the session's record
    /// still has its in-time set and no out-time.
    ///
    /// # Errors
    ///
    /// `InvalidDateRange` when the entry's out-time precedes its in-time.
    pub async fn manual_upsert(
        &self,
        manual: ManualAttendanceEntry,
        policy: &PayPolicy,
    ) -> EngineResult<AttendanceRecord> {
        let (worked_hours, ot_hours) = match (manual.in_time, manual.out_time) {
            (Some(in_time), Some(out_time)) => {
                if out_time < in_time {
                    return Err(EngineError::InvalidDateRange {
                        message: format!("Out time {} precedes in time {}", out_time, in_time),
                    });
                }
                let split = split_overtime(
                    hours_between(in_time, out_time),
                    policy.ot_threshold_hours,
                );
                (split.regular_hours, split.ot_hours)
            }
            _ => (Decimal::ZERO, Decimal::ZERO),
        };

        let record = AttendanceRecord {
            employee_id: manual.employee_id.clone(),
            date: manual.date,
            in_time: manual.in_time,
            out_time: manual.out_time,
            status: manual.status,
            worked_hours,
            ot_hours,
        };

        let entry = self.entry(&manual.employee_id).await;
        let mut state = entry.lock().await;

        match state.records.iter().rposition(|r| r.date == manual.date) {
            Some(index) => {
                state.records[index] = record.clone();

                // A session anchored to the overwritten record survives only
                // while that record still looks like an open punch; its
                // start time follows the new in-time.
                if let Some(session) = state.open_session {
                    if session.index == index {
                        state.open_session = match (record.in_time, record.out_time) {
                            (Some(started_at), None) => Some(OpenSession { index, started_at }),
                            _ => None,
                        };
                    }
                }
            }
            None => state.records.push(record.clone()),
        }

        Ok(record)
    }

    /// Returns the punch-session state for an employee.
    pub async fn session_state(&self, employee_id: &str) -> SessionState {
        match self.find(employee_id).await {
            Some(entry) => match entry.lock().await.open_session {
                Some(session) => SessionState::Open {
                    started_at: session.started_at,
                },
                None => SessionState::NoOpenSession,
            },
            None => SessionState::NoOpenSession,
        }
    }

    /// Returns clones of the employee's records dated inside the range.
    pub async fn records_in_range(
        &self,
        employee_id: &str,
        range: DateRange,
    ) -> Vec<AttendanceRecord> {
        match self.find(employee_id).await {
            Some(entry) => entry
                .lock()
                .await
                .records
                .iter()
                .filter(|r| range.contains(r.date))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }
}
