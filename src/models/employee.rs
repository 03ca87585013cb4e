//! Employee model and compensation profile types.
//!
//! This module defines the Employee struct and the Compensation tagged union
//! that determines which wage-calculation path applies to a worker.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly salary structure for a salaried employee.
///
/// All figures are full-month amounts in whole currency units or paise;
/// proration against days worked happens in the wage calculator, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// Monthly basic pay.
    pub basic: Decimal,
    /// Monthly house rent allowance.
    pub hra: Decimal,
    /// Monthly conveyance allowance.
    pub conveyance: Decimal,
    /// Monthly special and other allowances.
    pub other_allowances: Decimal,
}

impl SalaryStructure {
    /// Returns the full-month total of all salary components.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::SalaryStructure;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let salary = SalaryStructure {
    ///     basic: Decimal::from_str("42500").unwrap(),
    ///     hra: Decimal::from_str("21250").unwrap(),
    ///     conveyance: Decimal::ZERO,
    ///     other_allowances: Decimal::from_str("19450").unwrap(),
    /// };
    /// assert_eq!(salary.monthly_total(), Decimal::from_str("83200").unwrap());
    /// ```
    pub fn monthly_total(&self) -> Decimal {
        self.basic + self.hra + self.conveyance + self.other_allowances
    }
}

/// The pay basis for an employee.
///
/// Exactly one basis exists per employee: an hourly rate or a monthly salary
/// structure. The tagged union makes the "exactly one populated" rule a
/// property of the type rather than a convention to police at call sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "compensation_type", rename_all = "snake_case")]
pub enum Compensation {
    /// Paid per worked hour.
    Hourly {
        /// The hourly rate in currency units.
        hourly_rate: Decimal,
    },
    /// Paid a monthly salary, prorated by days worked.
    Salaried {
        /// The monthly salary structure.
        salary: SalaryStructure,
    },
}

/// Per-employee toggles controlling which statutory deductions apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryFlags {
    /// Whether provident fund (EPFO) is deducted.
    #[serde(default)]
    pub epfo_enabled: bool,
    /// Whether employee state insurance (ESIC) is deducted.
    #[serde(default)]
    pub esic_enabled: bool,
    /// Whether tax deducted at source applies.
    #[serde(default)]
    pub tds_enabled: bool,
}

/// A registered employee with their compensation profile.
///
/// The display fields (`name`, `designation`, `department`) exist for the
/// payslip/report boundary; the engine itself only reads the compensation
/// profile, statutory flags, and the recurring advance/loan amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Full name, for payslip rendering.
    pub name: String,
    /// Job designation, for payslip rendering.
    pub designation: String,
    /// Department, for payslip rendering.
    pub department: String,
    /// The pay basis.
    #[serde(flatten)]
    pub compensation: Compensation,
    /// Statutory deduction toggles.
    #[serde(default)]
    pub statutory: StatutoryFlags,
    /// Outstanding advance, deducted every cycle until HR resets it.
    #[serde(default)]
    pub advance_amount: Decimal,
    /// Outstanding loan instalment, deducted every cycle until HR resets it.
    #[serde(default)]
    pub loan_amount: Decimal,
}

impl Employee {
    /// Returns true if the employee is paid hourly.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Compensation, Employee, StatutoryFlags};
    /// use rust_decimal::Decimal;
    ///
    /// let worker = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Asha Verma".to_string(),
    ///     designation: "Technician".to_string(),
    ///     department: "Assembly".to_string(),
    ///     compensation: Compensation::Hourly {
    ///         hourly_rate: Decimal::new(150, 0),
    ///     },
    ///     statutory: StatutoryFlags::default(),
    ///     advance_amount: Decimal::ZERO,
    ///     loan_amount: Decimal::ZERO,
    /// };
    /// assert!(worker.is_hourly());
    /// ```
    pub fn is_hourly(&self) -> bool {
        matches!(self.compensation, Compensation::Hourly { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_hourly_employee() -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Asha Verma".to_string(),
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

    fn create_salaried_employee() -> Employee {
        Employee {
            id: "emp_002".to_string(),
            name: "Rahul Nair".to_string(),
            designation: "Accounts Manager".to_string(),
            department: "Finance".to_string(),
            compensation: Compensation::Salaried {
                salary: SalaryStructure {
                    basic: dec("42500"),
                    hra: dec("21250"),
                    conveyance: Decimal::ZERO,
                    other_allowances: dec("19450"),
                },
            },
            statutory: StatutoryFlags {
                epfo_enabled: true,
                esic_enabled: true,
                tds_enabled: false,
            },
            advance_amount: Decimal::ZERO,
            loan_amount: Decimal::ZERO,
        }
    }

    #[test]
    fn test_is_hourly_for_hourly_employee() {
        assert!(create_hourly_employee().is_hourly());
    }

    #[test]
    fn test_is_hourly_for_salaried_employee() {
        assert!(!create_salaried_employee().is_hourly());
    }

    #[test]
    fn test_monthly_total_sums_all_components() {
        let salary = SalaryStructure {
            basic: dec("41600"),
            hra: dec("24960"),
            conveyance: dec("8320"),
            other_allowances: dec("8320"),
        };
        assert_eq!(salary.monthly_total(), dec("83200"));
    }

    #[test]
    fn test_serialize_hourly_employee_uses_tag() {
        let employee = create_hourly_employee();
        let json = serde_json::to_string(&employee).unwrap();
        assert!(json.contains("\"compensation_type\":\"hourly\""));
        assert!(json.contains("\"hourly_rate\":\"150\""));
    }

    #[test]
    fn test_serialize_salaried_employee_uses_tag() {
        let employee = create_salaried_employee();
        let json = serde_json::to_string(&employee).unwrap();
        assert!(json.contains("\"compensation_type\":\"salaried\""));
        assert!(json.contains("\"basic\":\"42500\""));
    }

    #[test]
    fn test_employee_round_trip() {
        for employee in [create_hourly_employee(), create_salaried_employee()] {
            let json = serde_json::to_string(&employee).unwrap();
            let deserialized: Employee = serde_json::from_str(&json).unwrap();
            assert_eq!(employee, deserialized);
        }
    }

    #[test]
    fn test_deserialize_hourly_employee() {
        let json = r#"{
            "id": "emp_010",
            "name": "Meena Joshi",
            "designation": "Operator",
            "department": "Packing",
            "compensation_type": "hourly",
            "hourly_rate": "92.50"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_010");
        assert_eq!(
            employee.compensation,
            Compensation::Hourly {
                hourly_rate: dec("92.50")
            }
        );
        // Omitted sections fall back to defaults.
        assert!(!employee.statutory.epfo_enabled);
        assert_eq!(employee.advance_amount, Decimal::ZERO);
        assert_eq!(employee.loan_amount, Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_salaried_employee_with_flags() {
        let json = r#"{
            "id": "emp_011",
            "name": "Vikram Rao",
            "designation": "Supervisor",
            "department": "Stores",
            "compensation_type": "salaried",
            "salary": {
                "basic": "30000",
                "hra": "15000",
                "conveyance": "3000",
                "other_allowances": "2000"
            },
            "statutory": { "epfo_enabled": true, "esic_enabled": false, "tds_enabled": true },
            "advance_amount": "5000"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.statutory.epfo_enabled);
        assert!(!employee.statutory.esic_enabled);
        assert!(employee.statutory.tds_enabled);
        assert_eq!(employee.advance_amount, dec("5000"));
        match &employee.compensation {
            Compensation::Salaried { salary } => {
                assert_eq!(salary.monthly_total(), dec("50000"));
            }
            other => panic!("expected salaried compensation, got {:?}", other),
        }
    }

    #[test]
    fn test_statutory_flags_default_to_disabled() {
        let flags = StatutoryFlags::default();
        assert!(!flags.epfo_enabled);
        assert!(!flags.esic_enabled);
        assert!(!flags.tds_enabled);
    }
}
