//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PayPolicy;
use crate::store::{AttendanceLedger, EmployeeDirectory, PayrollRecordStore};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// pay policy and the in-memory stores for employees, attendance, and
/// saved payroll records.
#[derive(Clone)]
pub struct AppState {
    /// The loaded pay policy.
    policy: Arc<PayPolicy>,
    /// The employee directory.
    directory: Arc<EmployeeDirectory>,
    /// The attendance ledger.
    ledger: Arc<AttendanceLedger>,
    /// The payroll record store.
    payroll: Arc<PayrollRecordStore>,
}

impl AppState {
    /// Creates a new application state with the given pay policy and
    /// empty stores.
    pub fn new(policy: PayPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
            directory: Arc::new(EmployeeDirectory::new()),
            ledger: Arc::new(AttendanceLedger::new()),
            payroll: Arc::new(PayrollRecordStore::new()),
        }
    }

    /// Returns a reference to the pay policy.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }

    /// Returns a reference to the employee directory.
    pub fn directory(&self) -> &EmployeeDirectory {
        &self.directory
    }

    /// Returns a reference to the attendance ledger.
    pub fn ledger(&self) -> &AttendanceLedger {
        &self.ledger
    }

    /// Returns a reference to the payroll record store.
    pub fn payroll(&self) -> &PayrollRecordStore {
        &self.payroll
    }
}
