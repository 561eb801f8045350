//! Application state for the Delivery Fee Engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, FeeConfig};

/// Shared application state.
///
/// Holds the validated fee configuration, shared read-only across handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the fee configuration.
    pub fn fee_config(&self) -> &FeeConfig {
        self.config.config()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::default())
    }
}
