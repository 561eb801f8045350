//! Configuration types for delivery fee calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML fee configuration file. Every amount is
//! expressed in cents and every distance in meters.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Distance-based fee settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceFeeConfig {
    /// Flat fee charged for any delivery up to `base_distance`.
    pub base_fee: u64,
    /// Distance in meters covered by the base fee.
    pub base_distance: u64,
    /// Size in meters of each additional distance bucket.
    pub additional_interval: u64,
    /// Fee charged per started additional bucket.
    pub fee_per_additional_interval: u64,
}

/// Small order surcharge settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmallOrderConfig {
    /// Cart values below this amount are topped up to it by the surcharge.
    pub threshold: u64,
}

/// Item count surcharge settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSurchargeConfig {
    /// Item count from which (inclusive) every item is surcharged.
    pub surcharge_threshold: u64,
    /// Surcharge per counted item.
    pub charge_per_item: u64,
    /// Item count above which (exclusive) the bulk fee is added.
    pub bulk_threshold: u64,
    /// Flat bulk fee.
    pub bulk_fee: u64,
}

/// Rush hour settings.
///
/// The window is half-open: `start_hour <= hour < end_hour`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RushHourConfig {
    /// The day of week on which the rush multiplier may apply.
    pub weekday: Weekday,
    /// First hour (inclusive) of the rush window.
    pub start_hour: u32,
    /// Hour (exclusive) at which the rush window closes.
    pub end_hour: u32,
    /// Multiplier applied to the fee during the rush window.
    pub multiplier: Decimal,
}

/// Overall fee limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeLimits {
    /// Cart value at or above which delivery is free.
    pub free_delivery_threshold: u64,
    /// Hard ceiling on any delivery fee.
    pub max_fee: u64,
}

/// The complete fee configuration.
///
/// `FeeConfig::default()` carries the standard tariff; a YAML file loaded
/// through [`super::ConfigLoader`] can override it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Distance fee settings.
    pub distance: DistanceFeeConfig,
    /// Small order surcharge settings.
    pub small_order: SmallOrderConfig,
    /// Item surcharge settings.
    pub items: ItemSurchargeConfig,
    /// Rush hour settings.
    pub rush_hour: RushHourConfig,
    /// Free delivery threshold and fee cap.
    pub limits: FeeLimits,
}

impl Default for DistanceFeeConfig {
    fn default() -> Self {
        Self {
            base_fee: 200,
            base_distance: 1000,
            additional_interval: 500,
            fee_per_additional_interval: 100,
        }
    }
}

impl Default for SmallOrderConfig {
    fn default() -> Self {
        Self { threshold: 1000 }
    }
}

impl Default for ItemSurchargeConfig {
    fn default() -> Self {
        Self {
            surcharge_threshold: 5,
            charge_per_item: 50,
            bulk_threshold: 12,
            bulk_fee: 120,
        }
    }
}

impl Default for RushHourConfig {
    fn default() -> Self {
        Self {
            weekday: Weekday::Fri,
            start_hour: 15,
            end_hour: 19,
            multiplier: Decimal::new(12, 1),
        }
    }
}

impl Default for FeeLimits {
    fn default() -> Self {
        Self {
            free_delivery_threshold: 20000,
            max_fee: 1500,
        }
    }
}
