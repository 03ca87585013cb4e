//! Pay policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the pay
//! policy from a YAML file and validating it before use.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayPolicy;

/// Loads and validates the pay policy.
///
/// The policy file may omit any field or section; omissions fall back to the
/// shipped defaults. A file that parses but fails validation (a zero divisor,
/// a negative rate, split fractions that do not sum to one) is rejected.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
/// let policy = loader.policy();
/// println!("OT threshold: {} hours", policy.ot_threshold_hours);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: PayPolicy,
}

impl PolicyLoader {
    /// Loads the policy from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy file (e.g., "./config/policy.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - The parsed policy fails validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::PolicyLoader;
    ///
    /// let loader = PolicyLoader::load("./config/policy.yaml")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let policy = Self::parse(&path_str, &content)?;
        Ok(Self { policy })
    }

    /// Parses and validates policy YAML.
    fn parse(path_str: &str, content: &str) -> EngineResult<PayPolicy> {
        let policy: PayPolicy =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(path_str, &policy)?;
        Ok(policy)
    }

    /// Checks the invariants a usable policy must satisfy.
    fn validate(path_str: &str, policy: &PayPolicy) -> EngineResult<()> {
        let invalid = |message: &str| EngineError::ConfigParseError {
            path: path_str.to_string(),
            message: message.to_string(),
        };

        if policy.nominal_day_hours <= Decimal::ZERO {
            return Err(invalid("nominal_day_hours must be positive"));
        }
        if policy.standard_month_days <= Decimal::ZERO {
            return Err(invalid("standard_month_days must be positive"));
        }
        if policy.ot_threshold_hours < Decimal::ZERO {
            return Err(invalid("ot_threshold_hours must not be negative"));
        }

        let rates = &policy.statutory_rates;
        if rates.pf_rate < Decimal::ZERO
            || rates.esi_rate < Decimal::ZERO
            || rates.tds_rate < Decimal::ZERO
        {
            return Err(invalid("statutory rates must not be negative"));
        }

        let split = &policy.ctc_split;
        if split.basic < Decimal::ZERO
            || split.hra < Decimal::ZERO
            || split.conveyance < Decimal::ZERO
            || split.other < Decimal::ZERO
        {
            return Err(invalid("ctc_split fractions must not be negative"));
        }
        if split.basic + split.hra + split.conveyance + split.other != Decimal::ONE {
            return Err(invalid("ctc_split fractions must sum to 1"));
        }

        Ok(())
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }

    /// Consumes the loader and returns the policy.
    pub fn into_policy(self) -> PayPolicy {
        self.policy
    }
}
