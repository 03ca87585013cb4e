//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the employee,
//! attendance, and payroll endpoints, and the conversions into domain
//! types. Compensation input is accepted loosely (any one of an hourly
//! rate, an explicit monthly breakdown, or an annual CTC) and validated
//! here into the tagged `Compensation` form.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::split_annual_ctc;
use crate::config::PayPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceStatus, Compensation, Employee, ManualAttendanceEntry, PayMonth, PayrollLineItems,
    SalaryStructure, StatutoryFlags,
};

/// Request body for the `POST /employees` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterEmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's designation (e.g., "Technician").
    pub designation: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The compensation input, given as exactly one of its three forms.
    #[serde(flatten)]
    pub compensation: CompensationInput,
    /// Statutory deduction opt-ins, all off unless given.
    #[serde(default)]
    pub statutory: StatutoryFlags,
    /// Outstanding advance to deduct each cycle.
    #[serde(default)]
    pub advance_amount: Decimal,
    /// Outstanding loan instalment to deduct each cycle.
    #[serde(default)]
    pub loan_amount: Decimal,
}

/// Loose compensation input on registration and compensation updates.
///
/// Exactly one of the three fields must be given; the others stay null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompensationInput {
    /// Hourly rate for hourly workers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    /// Explicit monthly salary breakdown for salaried staff.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_breakdown: Option<MonthlyBreakdownInput>,
    /// Annual CTC to be split into a monthly structure by policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_ctc: Option<Decimal>,
}

/// Explicit monthly salary breakdown as HR supplies it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyBreakdownInput {
    /// Monthly basic pay.
    pub basic: Decimal,
    /// Monthly house rent allowance.
    pub hra: Decimal,
    /// Monthly special allowance, stored under other allowances.
    #[serde(default)]
    pub special_allowance: Decimal,
}

/// Request body for the `PUT /employees/:id/compensation` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCompensationRequest {
    /// The replacement compensation input.
    #[serde(flatten)]
    pub compensation: CompensationInput,
    /// Replacement statutory flags, untouched when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statutory: Option<StatutoryFlags>,
    /// Replacement advance amount, untouched when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advance_amount: Option<Decimal>,
    /// Replacement loan instalment, untouched when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<Decimal>,
}

/// Request body for the punch-in and punch-out endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRequest {
    /// The employee punching.
    pub employee_id: String,
}

/// Request body for the `PUT /attendance/manual` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualAttendanceRequest {
    /// The employee the entry is for.
    pub employee_id: String,
    /// The calendar day the entry covers.
    pub date: NaiveDate,
    /// Clock-in time, if worked.
    #[serde(default)]
    pub in_time: Option<NaiveDateTime>,
    /// Clock-out time, if worked.
    #[serde(default)]
    pub out_time: Option<NaiveDateTime>,
    /// Attendance status for the day.
    #[serde(default = "default_status")]
    pub status: AttendanceStatus,
}

fn default_status() -> AttendanceStatus {
    AttendanceStatus::Present
}

/// Query parameters for the `GET /attendance/aggregate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateQuery {
    /// The employee to aggregate.
    pub employee_id: String,
    /// Start of the range (inclusive).
    pub from: NaiveDate,
    /// End of the range (inclusive).
    pub to: NaiveDate,
}

/// Request body for the `POST /payroll/compute` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputePayrollRequest {
    /// The employee to compute payroll for.
    pub employee_id: String,
    /// The pay month, as `"YYYY-MM"`.
    pub month: PayMonth,
    /// Days worked override; when given it replaces the attendance-derived
    /// basis for both pay models.
    #[serde(default)]
    pub days_override: Option<Decimal>,
}

/// Request body for the `PUT /payroll` endpoint.
///
/// Carries the edited line items; gross, total deductions, and net are
/// recomputed on the server and any client-sent totals are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavePayrollRequest {
    /// The employee the record is for.
    pub employee_id: String,
    /// The pay month, as `"YYYY-MM"`.
    pub month: PayMonth,
    /// The payroll line items to store.
    pub breakdown: PayrollLineItems,
}

/// Query parameters for the `GET /payroll` and `GET /payroll/payslip`
/// endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollQuery {
    /// The employee the record is for.
    pub employee_id: String,
    /// The pay month, as `"YYYY-MM"`.
    pub month: PayMonth,
}

impl CompensationInput {
    /// Resolves the loose input into a tagged compensation profile.
    ///
    /// # Errors
    ///
    /// `InvalidCompensationProfile` when no form or more than one form is
    /// given, or when an amount is negative.
    pub fn into_compensation(
        self,
        employee_id: &str,
        policy: &PayPolicy,
    ) -> EngineResult<Compensation> {
        let invalid = |message: &str| EngineError::InvalidCompensationProfile {
            employee_id: employee_id.to_string(),
            message: message.to_string(),
        };

        match (self.hourly_rate, self.monthly_breakdown, self.annual_ctc) {
            (Some(hourly_rate), None, None) => {
                if hourly_rate < Decimal::ZERO {
                    return Err(invalid("hourly_rate must not be negative"));
                }
                Ok(Compensation::Hourly { hourly_rate })
            }
            (None, Some(breakdown), None) => {
                if breakdown.basic < Decimal::ZERO
                    || breakdown.hra < Decimal::ZERO
                    || breakdown.special_allowance < Decimal::ZERO
                {
                    return Err(invalid("salary components must not be negative"));
                }
                Ok(Compensation::Salaried {
                    salary: SalaryStructure {
                        basic: breakdown.basic,
                        hra: breakdown.hra,
                        conveyance: Decimal::ZERO,
                        other_allowances: breakdown.special_allowance,
                    },
                })
            }
            (None, None, Some(annual_ctc)) => {
                if annual_ctc < Decimal::ZERO {
                    return Err(invalid("annual_ctc must not be negative"));
                }
                Ok(Compensation::Salaried {
                    salary: split_annual_ctc(annual_ctc, policy),
                })
            }
            (None, None, None) => Err(invalid(
                "exactly one of hourly_rate, monthly_breakdown, or annual_ctc is required",
            )),
            _ => Err(invalid(
                "hourly_rate, monthly_breakdown, and annual_ctc are mutually exclusive",
            )),
        }
    }
}

impl RegisterEmployeeRequest {
    /// Converts the registration request into an employee profile,
    /// materializing the CTC split when the input came as an annual CTC.
    ///
    /// # Errors
    ///
    /// `InvalidCompensationProfile` for invalid compensation input or
    /// negative standing deductions.
    pub fn into_employee(self, policy: &PayPolicy) -> EngineResult<Employee> {
        if self.advance_amount < Decimal::ZERO || self.loan_amount < Decimal::ZERO {
            return Err(EngineError::InvalidCompensationProfile {
                employee_id: self.id,
                message: "advance_amount and loan_amount must not be negative".to_string(),
            });
        }

        let compensation = self.compensation.into_compensation(&self.id, policy)?;
        Ok(Employee {
            id: self.id,
            name: self.name,
            designation: self.designation,
            department: self.department,
            compensation,
            statutory: self.statutory,
            advance_amount: self.advance_amount,
            loan_amount: self.loan_amount,
        })
    }
}

impl UpdateCompensationRequest {
    /// Validates the optional standing-deduction replacements.
    ///
    /// # Errors
    ///
    /// `InvalidCompensationProfile` when a given amount is negative.
    pub fn validate_amounts(&self, employee_id: &str) -> EngineResult<()> {
        let negative = self.advance_amount.is_some_and(|a| a < Decimal::ZERO)
            || self.loan_amount.is_some_and(|l| l < Decimal::ZERO);
        if negative {
            return Err(EngineError::InvalidCompensationProfile {
                employee_id: employee_id.to_string(),
                message: "advance_amount and loan_amount must not be negative".to_string(),
            });
        }
        Ok(())
    }
}

impl From<ManualAttendanceRequest> for ManualAttendanceEntry {
    fn from(req: ManualAttendanceRequest) -> Self {
        ManualAttendanceEntry {
            employee_id: req.employee_id,
            date: req.date,
            in_time: req.in_time,
            out_time: req.out_time,
            status: req.status,
        }
    }
}
