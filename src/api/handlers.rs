//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate_hours, compute_monthly_payroll};
use crate::models::DateRange;

use super::request::{
    AggregateQuery, ComputePayrollRequest, ManualAttendanceRequest, PayrollQuery, PunchRequest,
    RegisterEmployeeRequest, SavePayrollRequest, UpdateCompensationRequest,
};
use super::response::{
    AggregateResponse, ApiError, ApiErrorResponse, PayrollComputation, PayslipResponse,
    PunchResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(register_employee_handler))
        .route("/employees/:id", get(get_employee_handler))
        .route(
            "/employees/:id/compensation",
            put(update_compensation_handler),
        )
        .route("/attendance/punch-in", post(punch_in_handler))
        .route("/attendance/punch-out", post(punch_out_handler))
        .route("/attendance/manual", put(manual_attendance_handler))
        .route("/attendance/aggregate", get(attendance_aggregate_handler))
        .route("/payroll/compute", post(compute_payroll_handler))
        .route("/payroll", put(save_payroll_handler).get(get_payroll_handler))
        .route("/payroll/payslip", get(payslip_handler))
        .with_state(state)
}

/// Builds a 200 response with a JSON body.
fn json_ok<T: Serialize>(value: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(value),
    )
        .into_response()
}

/// Builds an error response from a status and envelope.
fn error_response(error: ApiErrorResponse) -> Response {
    (
        error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error.error),
    )
        .into_response()
}

/// Translates a JSON extractor rejection into the error envelope.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Translates a query-string rejection into the error envelope.
fn query_rejection_error(correlation_id: Uuid, rejection: QueryRejection) -> ApiError {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Query string rejected"
    );
    ApiError::validation_error(body_text)
}

/// Handler for POST /employees endpoint.
///
/// Registers an employee, validating the compensation input and
/// materializing the CTC split when needed.
async fn register_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterEmployeeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee registration");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: rejection_error(correlation_id, rejection),
            });
        }
    };

    let employee = match request.into_employee(state.policy()) {
        Ok(employee) => employee,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee registration rejected"
            );
            return error_response(err.into());
        }
    };

    let stored = state.directory().register(employee).await;
    info!(
        correlation_id = %correlation_id,
        employee_id = %stored.id,
        "Employee registered"
    );
    json_ok(stored)
}

/// Handler for GET /employees/:id endpoint.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Fetching employee profile"
    );

    match state.directory().get(&employee_id).await {
        Ok(employee) => json_ok(employee),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee lookup failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for PUT /employees/:id/compensation endpoint.
///
/// Replaces the compensation profile and, when given, the statutory
/// flags and standing deduction amounts.
async fn update_compensation_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<UpdateCompensationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing compensation update"
    );

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: rejection_error(correlation_id, rejection),
            });
        }
    };

    if let Err(err) = request.validate_amounts(&employee_id) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Compensation update rejected"
        );
        return error_response(err.into());
    }

    let UpdateCompensationRequest {
        compensation,
        statutory,
        advance_amount,
        loan_amount,
    } = request;

    let compensation = match compensation.into_compensation(&employee_id, state.policy()) {
        Ok(compensation) => compensation,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Compensation update rejected"
            );
            return error_response(err.into());
        }
    };

    match state
        .directory()
        .update_compensation(&employee_id, compensation, statutory, advance_amount, loan_amount)
        .await
    {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                "Compensation updated"
            );
            json_ok(employee)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Compensation update failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /attendance/punch-in endpoint.
///
/// Stamps the server clock and opens a punch session.
async fn punch_in_handler(
    State(state): State<AppState>,
    payload: Result<Json<PunchRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: rejection_error(correlation_id, rejection),
            });
        }
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        "Processing punch-in"
    );

    if let Err(err) = state.directory().get(&request.employee_id).await {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Punch-in rejected"
        );
        return error_response(err.into());
    }

    let now = Utc::now().naive_utc();
    match state.ledger().punch_in(&request.employee_id, now).await {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                timestamp = %now,
                "Punch-in recorded"
            );
            json_ok(PunchResponse {
                employee_id: request.employee_id,
                timestamp: now,
                record,
            })
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Punch-in rejected"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /attendance/punch-out endpoint.
///
/// Stamps the server clock, closes the open session, and splits the
/// worked hours at the overtime threshold.
async fn punch_out_handler(
    State(state): State<AppState>,
    payload: Result<Json<PunchRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: rejection_error(correlation_id, rejection),
            });
        }
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        "Processing punch-out"
    );

    if let Err(err) = state.directory().get(&request.employee_id).await {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Punch-out rejected"
        );
        return error_response(err.into());
    }

    let now = Utc::now().naive_utc();
    match state
        .ledger()
        .punch_out(&request.employee_id, now, state.policy())
        .await
    {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                worked_hours = %record.worked_hours,
                ot_hours = %record.ot_hours,
                "Punch-out recorded"
            );
            json_ok(PunchResponse {
                employee_id: request.employee_id,
                timestamp: now,
                record,
            })
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Punch-out rejected"
            );
            error_response(err.into())
        }
    }
}

/// Handler for PUT /attendance/manual endpoint.
///
/// Upserts an attendance record for a calendar day, bypassing the punch
/// state machine.
async fn manual_attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<ManualAttendanceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: rejection_error(correlation_id, rejection),
            });
        }
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        date = %request.date,
        "Processing manual attendance entry"
    );

    if let Err(err) = state.directory().get(&request.employee_id).await {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Manual attendance entry rejected"
        );
        return error_response(err.into());
    }

    match state
        .ledger()
        .manual_upsert(request.into(), state.policy())
        .await
    {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %record.employee_id,
                date = %record.date,
                worked_hours = %record.worked_hours,
                "Manual attendance entry stored"
            );
            json_ok(record)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Manual attendance entry rejected"
            );
            error_response(err.into())
        }
    }
}

/// Handler for GET /attendance/aggregate endpoint.
///
/// Accumulates worked hours, overtime hours, and present days over an
/// inclusive date range.
async fn attendance_aggregate_handler(
    State(state): State<AppState>,
    query: Result<Query<AggregateQuery>, QueryRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let query = match query {
        Ok(Query(q)) => q,
        Err(rejection) => {
            return error_response(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: query_rejection_error(correlation_id, rejection),
            });
        }
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = %query.employee_id,
        from = %query.from,
        to = %query.to,
        "Aggregating attendance"
    );

    if let Err(err) = state.directory().get(&query.employee_id).await {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Attendance aggregation rejected"
        );
        return error_response(err.into());
    }

    let range = match DateRange::new(query.from, query.to) {
        Ok(range) => range,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Attendance aggregation rejected"
            );
            return error_response(err.into());
        }
    };

    let records = state
        .ledger()
        .records_in_range(&query.employee_id, range)
        .await;
    let aggregate = aggregate_hours(&records, range);

    json_ok(AggregateResponse {
        employee_id: query.employee_id,
        from: query.from,
        to: query.to,
        aggregate,
    })
}

/// Handler for POST /payroll/compute endpoint.
///
/// Computes an ephemeral monthly payroll breakdown; nothing is stored.
async fn compute_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComputePayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: rejection_error(correlation_id, rejection),
            });
        }
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        month = %request.month,
        "Processing payroll computation"
    );

    let employee = match state.directory().get(&request.employee_id).await {
        Ok(employee) => employee,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll computation rejected"
            );
            return error_response(err.into());
        }
    };

    if request.days_override.is_some_and(|d| d < Decimal::ZERO) {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %request.employee_id,
            "Negative days override rejected"
        );
        return error_response(ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::validation_error("days_override must not be negative"),
        });
    }

    let range = match request.month.range() {
        Ok(range) => range,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll computation rejected"
            );
            return error_response(err.into());
        }
    };
    let records = state
        .ledger()
        .records_in_range(&request.employee_id, range)
        .await;

    match compute_monthly_payroll(
        &employee,
        &records,
        request.month,
        request.days_override,
        state.policy(),
    ) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                month = %request.month,
                net_payable = %breakdown.net_payable,
                "Payroll computed"
            );
            json_ok(PayrollComputation {
                computation_id: Uuid::new_v4(),
                computed_at: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                employee_id: request.employee_id,
                month: request.month,
                breakdown,
            })
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll computation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for PUT /payroll endpoint.
///
/// Saves a payroll record from edited line items, recomputing the
/// derived totals server-side.
async fn save_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<SavePayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: rejection_error(correlation_id, rejection),
            });
        }
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        month = %request.month,
        "Processing payroll save"
    );

    if let Err(err) = state.directory().get(&request.employee_id).await {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Payroll save rejected"
        );
        return error_response(err.into());
    }

    let record = state
        .payroll()
        .upsert(&request.employee_id, request.month, request.breakdown)
        .await;
    info!(
        correlation_id = %correlation_id,
        record_id = %record.record_id,
        net_payable = %record.breakdown.net_payable,
        "Payroll record saved"
    );
    json_ok(record)
}

/// Handler for GET /payroll endpoint.
async fn get_payroll_handler(
    State(state): State<AppState>,
    query: Result<Query<PayrollQuery>, QueryRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let query = match query {
        Ok(Query(q)) => q,
        Err(rejection) => {
            return error_response(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: query_rejection_error(correlation_id, rejection),
            });
        }
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = %query.employee_id,
        month = %query.month,
        "Fetching payroll record"
    );

    match state.payroll().get(&query.employee_id, query.month).await {
        Some(record) => json_ok(record),
        None => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %query.employee_id,
                month = %query.month,
                "Payroll record not found"
            );
            error_response(ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::payroll_record_not_found(&query.employee_id, query.month),
            })
        }
    }
}

/// Handler for GET /payroll/payslip endpoint.
///
/// Serves the payslip feed: a saved record when one exists, otherwise a
/// live computation from current attendance.
async fn payslip_handler(
    State(state): State<AppState>,
    query: Result<Query<PayrollQuery>, QueryRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let query = match query {
        Ok(Query(q)) => q,
        Err(rejection) => {
            return error_response(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: query_rejection_error(correlation_id, rejection),
            });
        }
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = %query.employee_id,
        month = %query.month,
        "Building payslip feed"
    );

    let employee = match state.directory().get(&query.employee_id).await {
        Ok(employee) => employee,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payslip feed rejected"
            );
            return error_response(err.into());
        }
    };

    if let Some(record) = state.payroll().get(&query.employee_id, query.month).await {
        info!(
            correlation_id = %correlation_id,
            record_id = %record.record_id,
            "Payslip served from saved record"
        );
        return json_ok(PayslipResponse {
            employee_id: employee.id,
            name: employee.name,
            designation: employee.designation,
            department: employee.department,
            month: query.month,
            finalized: true,
            record_id: Some(record.record_id),
            saved_at: Some(record.saved_at),
            breakdown: record.breakdown,
        });
    }

    let range = match query.month.range() {
        Ok(range) => range,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payslip feed rejected"
            );
            return error_response(err.into());
        }
    };
    let records = state
        .ledger()
        .records_in_range(&query.employee_id, range)
        .await;

    match compute_monthly_payroll(&employee, &records, query.month, None, state.policy()) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %query.employee_id,
                "Payslip served from live computation"
            );
            json_ok(PayslipResponse {
                employee_id: employee.id,
                name: employee.name,
                designation: employee.designation,
                department: employee.department,
                month: query.month,
                finalized: false,
                record_id: None,
                saved_at: None,
                breakdown,
            })
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payslip computation failed"
            );
            error_response(err.into())
        }
    }
}
