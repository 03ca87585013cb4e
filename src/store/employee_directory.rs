//! The in-memory employee directory.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::{Compensation, Employee, StatutoryFlags};

/// In-memory directory of registered employees keyed by id.
///
/// Registration replaces any previous profile under the same id, so
/// re-registering an employee acts as a full profile update.
#[derive(Debug, Default)]
pub struct EmployeeDirectory {
    employees: RwLock<HashMap<String, Employee>>,
}

impl EmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an employee, replacing any existing profile with the same
    /// id, and returns the stored profile.
    pub async fn register(&self, employee: Employee) -> Employee {
        let mut map = self.employees.write().await;
        map.insert(employee.id.clone(), employee.clone());
        employee
    }

    /// Returns the employee's profile.
    ///
    /// # Errors
    ///
    /// `UnknownEmployee` when no employee is registered under the id.
    pub async fn get(&self, employee_id: &str) -> EngineResult<Employee> {
        self.employees
            .read()
            .await
            .get(employee_id)
            .cloned()
            .ok_or_else(|| EngineError::UnknownEmployee {
                employee_id: employee_id.to_string(),
            })
    }

    /// Replaces the employee's compensation profile, leaving identity fields
    /// untouched. Statutory flags and standing deductions are updated only
    /// when given.
    ///
    /// # Errors
    ///
    /// `UnknownEmployee` when no employee is registered under the id.
    pub async fn update_compensation(
        &self,
        employee_id: &str,
        compensation: Compensation,
        statutory: Option<StatutoryFlags>,
        advance_amount: Option<Decimal>,
        loan_amount: Option<Decimal>,
    ) -> EngineResult<Employee> {
        let mut map = self.employees.write().await;
        let employee = map
            .get_mut(employee_id)
            .ok_or_else(|| EngineError::UnknownEmployee {
                employee_id: employee_id.to_string(),
            })?;

        employee.compensation = compensation;
        if let Some(flags) = statutory {
            employee.statutory = flags;
        }
        if let Some(advance) = advance_amount {
            employee.advance_amount = advance;
        }
        if let Some(loan) = loan_amount {
            employee.loan_amount = loan;
        }

        Ok(employee.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SalaryStructure;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn hourly_employee(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: "Priya Sharma".to_string(),
            designation: "Technician".to_string(),
            department: "Assembly".to_string(),
            compensation: Compensation::Hourly {
                hourly_rate: dec("150"),
            },
            statutory: StatutoryFlags::default(),
            advance_amount: Decimal::ZERO,
            loan_amount: Decimal::ZERO,
        }
    }

    // ==========================================================================
    // DIR-001: register then get returns the stored profile
    // ==========================================================================
    #[tokio::test]
    async fn test_dir_001_register_and_get() {
        let directory = EmployeeDirectory::new();
        directory.register(hourly_employee("emp_001")).await;

        let found = directory.get("emp_001").await.unwrap();
        assert_eq!(found.name, "Priya Sharma");
        assert!(found.is_hourly());
    }

    // ==========================================================================
    // DIR-002: get for an unregistered id is rejected
    // ==========================================================================
    #[tokio::test]
    async fn test_dir_002_get_unknown() {
        let directory = EmployeeDirectory::new();

        let result = directory.get("emp_404").await;

        match result {
            Err(EngineError::UnknownEmployee { employee_id }) => {
                assert_eq!(employee_id, "emp_404");
            }
            other => panic!("Expected UnknownEmployee, got {:?}", other),
        }
    }

    // ==========================================================================
    // DIR-003: re-registering replaces the whole profile
    // ==========================================================================
    #[tokio::test]
    async fn test_dir_003_reregister_replaces() {
        let directory = EmployeeDirectory::new();
        directory.register(hourly_employee("emp_001")).await;

        let mut updated = hourly_employee("emp_001");
        updated.name = "Priya S. Sharma".to_string();
        updated.compensation = Compensation::Hourly {
            hourly_rate: dec("175"),
        };
        directory.register(updated).await;

        let found = directory.get("emp_001").await.unwrap();
        assert_eq!(found.name, "Priya S. Sharma");
        assert_eq!(
            found.compensation,
            Compensation::Hourly {
                hourly_rate: dec("175")
            }
        );
    }

    // ==========================================================================
    // DIR-004: compensation update switches the pay model in place
    // ==========================================================================
    #[tokio::test]
    async fn test_dir_004_update_compensation_switches_model() {
        let directory = EmployeeDirectory::new();
        directory.register(hourly_employee("emp_001")).await;

        let updated = directory
            .update_compensation(
                "emp_001",
                Compensation::Salaried {
                    salary: SalaryStructure {
                        basic: dec("41600"),
                        hra: dec("24960"),
                        conveyance: dec("8320"),
                        other_allowances: dec("8320"),
                    },
                },
                None,
                None,
                None,
            )
            .await
            .unwrap();

        assert!(!updated.is_hourly());
        // Identity fields survive the update.
        assert_eq!(updated.name, "Priya Sharma");
        assert_eq!(updated.department, "Assembly");
    }

    // ==========================================================================
    // DIR-005: statutory flags and standing deductions update only when given
    // ==========================================================================
    #[tokio::test]
    async fn test_dir_005_update_optional_fields() {
        let directory = EmployeeDirectory::new();
        let mut employee = hourly_employee("emp_001");
        employee.statutory = StatutoryFlags {
            epfo_enabled: true,
            esic_enabled: true,
            tds_enabled: false,
        };
        employee.advance_amount = dec("1000");
        directory.register(employee).await;

        // No optional fields given: flags and amounts are untouched.
        let unchanged = directory
            .update_compensation(
                "emp_001",
                Compensation::Hourly {
                    hourly_rate: dec("160"),
                },
                None,
                None,
                None,
            )
            .await
            .unwrap();
        assert!(unchanged.statutory.epfo_enabled);
        assert_eq!(unchanged.advance_amount, dec("1000"));

        let updated = directory
            .update_compensation(
                "emp_001",
                Compensation::Hourly {
                    hourly_rate: dec("160"),
                },
                Some(StatutoryFlags::default()),
                Some(Decimal::ZERO),
                Some(dec("250")),
            )
            .await
            .unwrap();
        assert!(!updated.statutory.epfo_enabled);
        assert_eq!(updated.advance_amount, Decimal::ZERO);
        assert_eq!(updated.loan_amount, dec("250"));
    }

    // ==========================================================================
    // DIR-006: compensation update for an unregistered id is rejected
    // ==========================================================================
    #[tokio::test]
    async fn test_dir_006_update_unknown() {
        let directory = EmployeeDirectory::new();

        let result = directory
            .update_compensation(
                "emp_404",
                Compensation::Hourly {
                    hourly_rate: dec("150"),
                },
                None,
                None,
                None,
            )
            .await;

        assert!(matches!(result, Err(EngineError::UnknownEmployee { .. })));
    }
}
