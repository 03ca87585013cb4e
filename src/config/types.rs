//! Configuration types for the pay policy.
//!
//! This module contains the strongly-typed policy structure deserialized
//! from the YAML policy file. Every formerly hard-wired payroll constant
//! lives here, so tests and deployments can override them without touching
//! calculation logic.

use rust_decimal::Decimal;
use serde::Deserialize;

const DEFAULT_OT_THRESHOLD_HOURS: Decimal = Decimal::from_parts(9, 0, 0, false, 0);
const DEFAULT_NOMINAL_DAY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);
const DEFAULT_STANDARD_MONTH_DAYS: Decimal = Decimal::from_parts(26, 0, 0, false, 0);

const DEFAULT_BASIC_FRACTION: Decimal = Decimal::from_parts(50, 0, 0, false, 2);
const DEFAULT_HRA_FRACTION: Decimal = Decimal::from_parts(30, 0, 0, false, 2);
const DEFAULT_CONVEYANCE_FRACTION: Decimal = Decimal::from_parts(10, 0, 0, false, 2);
const DEFAULT_OTHER_FRACTION: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

const DEFAULT_PF_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);
const DEFAULT_ESI_RATE: Decimal = Decimal::from_parts(75, 0, 0, false, 4);
const DEFAULT_TDS_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Fractions for splitting a monthly CTC figure into salary components.
///
/// The four fractions must sum to one; the loader rejects policies where
/// they do not.
#[derive(Debug, Clone, Deserialize)]
pub struct CtcSplit {
    /// Fraction of monthly CTC allocated to basic pay.
    pub basic: Decimal,
    /// Fraction of monthly CTC allocated to house rent allowance.
    pub hra: Decimal,
    /// Fraction of monthly CTC allocated to conveyance.
    pub conveyance: Decimal,
    /// Fraction of monthly CTC allocated to other allowances.
    pub other: Decimal,
}

impl Default for CtcSplit {
    fn default() -> Self {
        CtcSplit {
            basic: DEFAULT_BASIC_FRACTION,
            hra: DEFAULT_HRA_FRACTION,
            conveyance: DEFAULT_CONVEYANCE_FRACTION,
            other: DEFAULT_OTHER_FRACTION,
        }
    }
}

/// Statutory deduction rates.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryRates {
    /// Provident fund rate, applied to basic pay.
    pub pf_rate: Decimal,
    /// Employee state insurance rate, applied to gross earnings.
    pub esi_rate: Decimal,
    /// Tax-deducted-at-source rate, applied to gross earnings.
    pub tds_rate: Decimal,
}

impl Default for StatutoryRates {
    fn default() -> Self {
        StatutoryRates {
            pf_rate: DEFAULT_PF_RATE,
            esi_rate: DEFAULT_ESI_RATE,
            tds_rate: DEFAULT_TDS_RATE,
        }
    }
}

/// The complete pay policy.
///
/// Sections and fields omitted from the policy file fall back to the
/// defaults, which mirror the statutory conventions the engine ships with.
#[derive(Debug, Clone, Deserialize)]
pub struct PayPolicy {
    /// Daily hours beyond which a session counts as overtime.
    #[serde(default = "default_ot_threshold_hours")]
    pub ot_threshold_hours: Decimal,
    /// Hours a nominal working day represents when HR overrides days worked.
    #[serde(default = "default_nominal_day_hours")]
    pub nominal_day_hours: Decimal,
    /// Working days representing a full salaried month.
    #[serde(default = "default_standard_month_days")]
    pub standard_month_days: Decimal,
    /// CTC split fractions.
    #[serde(default)]
    pub ctc_split: CtcSplit,
    /// Statutory deduction rates.
    #[serde(default)]
    pub statutory_rates: StatutoryRates,
}

impl Default for PayPolicy {
    fn default() -> Self {
        PayPolicy {
            ot_threshold_hours: DEFAULT_OT_THRESHOLD_HOURS,
            nominal_day_hours: DEFAULT_NOMINAL_DAY_HOURS,
            standard_month_days: DEFAULT_STANDARD_MONTH_DAYS,
            ctc_split: CtcSplit::default(),
            statutory_rates: StatutoryRates::default(),
        }
    }
}

fn default_ot_threshold_hours() -> Decimal {
    DEFAULT_OT_THRESHOLD_HOURS
}

fn default_nominal_day_hours() -> Decimal {
    DEFAULT_NOMINAL_DAY_HOURS
}

fn default_standard_month_days() -> Decimal {
    DEFAULT_STANDARD_MONTH_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_policy_values() {
        let policy = PayPolicy::default();

        assert_eq!(policy.ot_threshold_hours, dec("9"));
        assert_eq!(policy.nominal_day_hours, dec("8"));
        assert_eq!(policy.standard_month_days, dec("26"));
    }

    #[test]
    fn test_default_ctc_split_sums_to_one() {
        let split = CtcSplit::default();
        let total = split.basic + split.hra + split.conveyance + split.other;
        assert_eq!(total, dec("1"));
    }

    #[test]
    fn test_default_statutory_rates() {
        let rates = StatutoryRates::default();

        assert_eq!(rates.pf_rate, dec("0.12"));
        assert_eq!(rates.esi_rate, dec("0.0075"));
        assert_eq!(rates.tds_rate, dec("0.10"));
    }

    #[test]
    fn test_empty_yaml_yields_defaults() {
        let policy: PayPolicy = serde_yaml::from_str("{}").unwrap();

        assert_eq!(policy.ot_threshold_hours, dec("9"));
        assert_eq!(policy.ctc_split.basic, dec("0.50"));
        assert_eq!(policy.statutory_rates.esi_rate, dec("0.0075"));
    }

    #[test]
    fn test_partial_yaml_overrides_only_named_fields() {
        let yaml = "ot_threshold_hours: \"8.5\"\n";
        let policy: PayPolicy = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(policy.ot_threshold_hours, dec("8.5"));
        assert_eq!(policy.nominal_day_hours, dec("8"));
        assert_eq!(policy.statutory_rates.pf_rate, dec("0.12"));
    }
}
