//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for employee
//! registration, attendance punches, and payroll computation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AggregateQuery, CompensationInput, ComputePayrollRequest, ManualAttendanceRequest,
    MonthlyBreakdownInput, PayrollQuery, PunchRequest, RegisterEmployeeRequest,
    SavePayrollRequest, UpdateCompensationRequest,
};
pub use response::{
    AggregateResponse, ApiError, PayrollComputation, PayslipResponse, PunchResponse,
};
pub use state::AppState;
