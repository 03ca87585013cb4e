//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions: session duration and
//! overtime splitting, attendance aggregation over date ranges, annual CTC
//! splitting, hourly and salaried earnings, statutory deductions, and the
//! monthly payroll orchestration that ties them together. Nothing in here
//! touches a store or a clock; every function is a deterministic mapping
//! from inputs to figures.

mod ctc_split;
mod deductions;
mod hour_accumulator;
mod hourly_earnings;
mod overtime_split;
mod payroll_computation;
mod rounding;
mod salaried_earnings;

pub use ctc_split::split_annual_ctc;
pub use deductions::calculate_deductions;
pub use hour_accumulator::{AttendanceAggregate, aggregate_hours};
pub use hourly_earnings::{HourlyBasis, calculate_hourly_earnings};
pub use overtime_split::{OvertimeSplit, hours_between, split_overtime};
pub use payroll_computation::compute_monthly_payroll;
pub use rounding::{round_to_paise, round_to_rupee};
pub use salaried_earnings::calculate_salaried_earnings;
