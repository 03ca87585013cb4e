//! Pay policy configuration loading and types.
//!
//! This module provides functionality for loading the pay policy from a
//! YAML file, with validation and defaults for omitted sections.

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{CtcSplit, PayPolicy, StatutoryRates};
