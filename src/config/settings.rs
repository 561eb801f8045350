//! Process settings read from the environment.
//!
//! - `HOST`: Server host address (default: `0.0.0.0`)
//! - `PORT`: Server port (default: `5000`)
//! - `FEE_CONFIG_PATH`: YAML fee configuration (default: built-in tariff)
//! - `RUST_LOG`: Logging filter (default: `info`)

use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_LOG_FILTER: &str = "info";

/// Server settings resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Optional path to a YAML fee configuration.
    pub fee_config_path: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl ServerSettings {
    /// Reads settings from the process environment.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through an arbitrary lookup function.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| EngineError::InvalidConfig {
                field: "PORT".to_string(),
                message: format!("'{}' is not a valid port number", raw),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            fee_config_path: get("FEE_CONFIG_PATH").map(PathBuf::from),
            log_filter: get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    /// Returns the `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> EngineResult<ServerSettings> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerSettings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let settings = settings_from(&[]).unwrap();

        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 5000);
        assert_eq!(settings.fee_config_path, None);
        assert_eq!(settings.log_filter, "info");
        assert_eq!(settings.bind_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_reads_all_variables() {
        let settings = settings_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("FEE_CONFIG_PATH", "./config/delivery_fees.yaml"),
            ("RUST_LOG", "delivery_fee_engine=debug"),
        ])
        .unwrap();

        assert_eq!(settings.bind_address(), "127.0.0.1:8080");
        assert_eq!(
            settings.fee_config_path,
            Some(PathBuf::from("./config/delivery_fees.yaml"))
        );
        assert_eq!(settings.log_filter, "delivery_fee_engine=debug");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let settings = settings_from(&[("HOST", "  "), ("FEE_CONFIG_PATH", "")]).unwrap();

        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.fee_config_path, None);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        match settings_from(&[("PORT", "eighty")]) {
            Err(EngineError::InvalidConfig { field, message }) => {
                assert_eq!(field, "PORT");
                assert!(message.contains("eighty"));
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_port_out_of_range_is_rejected() {
        assert!(settings_from(&[("PORT", "70000")]).is_err());
    }
}
