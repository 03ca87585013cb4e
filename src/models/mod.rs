//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod pay_month;
mod payroll;

pub use attendance::{
    AttendanceRecord, AttendanceStatus, DateRange, ManualAttendanceEntry, SessionState,
};
pub use employee::{Compensation, Employee, SalaryStructure, StatutoryFlags};
pub use pay_month::PayMonth;
pub use payroll::{
    DeductionsBreakdown, EarningsBreakdown, PayrollBreakdown, PayrollLineItems, PayrollRecord,
};
