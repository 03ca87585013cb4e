//! Attendance Accrual & Payroll Computation Engine
//!
//! This crate tracks workforce attendance through a punch-in/punch-out session
//! state machine and converts it into monthly payroll figures for hourly and
//! salaried employees under Indian statutory deduction conventions (PF, ESI,
//! TDS).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
