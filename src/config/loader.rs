//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the fee
//! configuration from a YAML file and checking that it is usable.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::FeeConfig;

/// Loads, validates and provides access to the fee configuration.
///
/// # Example
///
/// ```no_run
/// use delivery_fee_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/delivery_fees.yaml").unwrap();
/// println!("Maximum fee: {} cents", loader.config().limits.max_fee);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: FeeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML or misses a field (`ConfigParseError`)
    /// - A value would make the calculation meaningless (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: FeeConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        debug!(path = %path_str, "Loaded fee configuration");
        Self::from_config(config)
    }

    /// Wraps an in-memory configuration after validating it.
    pub fn from_config(config: FeeConfig) -> EngineResult<Self> {
        validate(&config)?;
        Ok(Self { config })
    }

    /// Returns the underlying fee configuration.
    pub fn config(&self) -> &FeeConfig {
        &self.config
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Checks the values the calculator divides by, counts from, or compares
/// hours against.
fn validate(config: &FeeConfig) -> EngineResult<()> {
    if config.distance.additional_interval == 0 {
        return Err(invalid(
            "distance.additional_interval",
            "must be greater than 0",
        ));
    }

    if config.items.surcharge_threshold == 0 {
        return Err(invalid("items.surcharge_threshold", "must be at least 1"));
    }

    let rush = &config.rush_hour;
    if rush.end_hour > 24 {
        return Err(invalid("rush_hour.end_hour", "must be at most 24"));
    }
    if rush.start_hour >= rush.end_hour {
        return Err(invalid(
            "rush_hour.start_hour",
            "must be earlier than rush_hour.end_hour",
        ));
    }
    if rush.multiplier < Decimal::ZERO {
        return Err(invalid("rush_hour.multiplier", "must not be negative"));
    }

    Ok(())
}
