//! Configuration loading and management for the Delivery Fee Engine.
//!
//! This module provides the fee tariff ([`FeeConfig`]), its YAML loader
//! ([`ConfigLoader`]) and the environment-driven [`ServerSettings`].
//!
//! # Example
//!
//! ```no_run
//! use delivery_fee_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/delivery_fees.yaml").unwrap();
//! println!("Free delivery from {} cents", loader.config().limits.free_delivery_threshold);
//! ```

mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::ServerSettings;
pub use types::{
    DistanceFeeConfig, FeeConfig, FeeLimits, ItemSurchargeConfig, RushHourConfig,
    SmallOrderConfig,
};
