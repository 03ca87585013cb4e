//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during attendance tracking and
//! payroll computation.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Every variant
/// is recoverable: the HTTP layer translates it into a failure response and
/// the process carries on.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::UnknownEmployee {
///     employee_id: "emp_041".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown employee: emp_041");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A punch-in was attempted while a session is already open.
    #[error("Employee {employee_id} already punched in at {started_at}")]
    AlreadyPunchedIn {
        /// The employee with the open session.
        employee_id: String,
        /// When the open session started.
        started_at: NaiveDateTime,
    },

    /// A punch-out was attempted with no open session to close.
    #[error("Employee {employee_id} has no active attendance session")]
    NoActiveSession {
        /// The employee without an open session.
        employee_id: String,
    },

    /// A compensation profile was inconsistent with its compensation type.
    #[error("Invalid compensation profile for employee {employee_id}: {message}")]
    InvalidCompensationProfile {
        /// The employee whose profile was rejected.
        employee_id: String,
        /// A description of what made the profile invalid.
        message: String,
    },

    /// The referenced employee is not registered.
    #[error("Unknown employee: {employee_id}")]
    UnknownEmployee {
        /// The employee id that was not found.
        employee_id: String,
    },

    /// A date range or time interval was inverted or otherwise unusable.
    #[error("Invalid date range: {message}")]
    InvalidDateRange {
        /// A description of what made the range invalid.
        message: String,
    },

    /// Policy configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse or validation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
