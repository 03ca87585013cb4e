//! In-memory state for employees, attendance, and saved payroll records.

mod attendance_ledger;
mod employee_directory;
mod payroll_records;

pub use attendance_ledger::AttendanceLedger;
pub use employee_directory::EmployeeDirectory;
pub use payroll_records::PayrollRecordStore;
