//! Response types for the payroll engine API.
//!
//! This module defines the error response structures, the mapping from
//! engine errors onto HTTP statuses, and the response bodies for the
//! computation and payslip endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::AttendanceAggregate;
use crate::error::EngineError;
use crate::models::{AttendanceRecord, PayMonth, PayrollBreakdown};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a payroll record not found error response.
    pub fn payroll_record_not_found(employee_id: &str, month: PayMonth) -> Self {
        Self::with_details(
            "PAYROLL_RECORD_NOT_FOUND",
            format!(
                "No payroll record saved for employee '{}' in {}",
                employee_id, month
            ),
            "Save a record via PUT /payroll or compute one via POST /payroll/compute",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::AlreadyPunchedIn {
                employee_id,
                started_at,
            } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "ALREADY_PUNCHED_IN",
                    format!(
                        "Employee {} already punched in at {}",
                        employee_id, started_at
                    ),
                    "The employee must punch out before a new session can begin",
                ),
            },
            EngineError::NoActiveSession { employee_id } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "NO_ACTIVE_SESSION",
                    format!("Employee {} has no active attendance session", employee_id),
                    "The employee must punch in before punching out",
                ),
            },
            EngineError::InvalidCompensationProfile {
                employee_id,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_COMPENSATION_PROFILE",
                    format!(
                        "Invalid compensation profile for employee '{}': {}",
                        employee_id, message
                    ),
                    "The compensation input does not form a valid pay profile",
                ),
            },
            EngineError::UnknownEmployee { employee_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "UNKNOWN_EMPLOYEE",
                    format!("Unknown employee: {}", employee_id),
                    "The employee id is not registered with this engine",
                ),
            },
            EngineError::InvalidDateRange { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "INVALID_DATE_RANGE",
                    format!("Invalid date range: {}", message),
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}

/// Response body for the punch-in and punch-out endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchResponse {
    /// The employee who punched.
    pub employee_id: String,
    /// The server-stamped punch time.
    pub timestamp: NaiveDateTime,
    /// The attendance record the punch created or closed.
    pub record: AttendanceRecord,
}

/// Response body for the `GET /attendance/aggregate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateResponse {
    /// The employee aggregated.
    pub employee_id: String,
    /// Start of the aggregated range (inclusive).
    pub from: NaiveDate,
    /// End of the aggregated range (inclusive).
    pub to: NaiveDate,
    /// The accumulated hours and day counts.
    #[serde(flatten)]
    pub aggregate: AttendanceAggregate,
}

/// Response body for the `POST /payroll/compute` endpoint.
///
/// An ephemeral computation: nothing is stored, and each call gets a
/// fresh computation id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollComputation {
    /// Unique identifier for this computation.
    pub computation_id: Uuid,
    /// When the computation was performed.
    pub computed_at: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The employee computed.
    pub employee_id: String,
    /// The pay month computed.
    pub month: PayMonth,
    /// The computed payroll breakdown.
    pub breakdown: PayrollBreakdown,
}

/// Response body for the `GET /payroll/payslip` endpoint.
///
/// Feeds the payslip renderer: a saved record when one exists (marked
/// `finalized`), otherwise a live computation from current attendance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipResponse {
    /// The employee the payslip is for.
    pub employee_id: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's designation.
    pub designation: String,
    /// The employee's department.
    pub department: String,
    /// The pay month covered.
    pub month: PayMonth,
    /// Whether the figures come from a saved payroll record.
    pub finalized: bool,
    /// The saved record's id, present only when finalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<Uuid>,
    /// When the saved record was stored, present only when finalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    /// The payroll breakdown backing the payslip.
    pub breakdown: PayrollBreakdown,
}
