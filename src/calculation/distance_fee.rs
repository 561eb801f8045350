//! Distance fee calculation.
//!
//! A flat base fee covers deliveries up to the base distance. Every started
//! additional interval beyond it adds a fixed fee.

use crate::config::DistanceFeeConfig;
use crate::models::AuditStep;

/// The result of the distance fee calculation.
#[derive(Debug, Clone)]
pub struct DistanceFeeResult {
    /// The distance fee in cents.
    pub fee: u64,
    /// Number of additional intervals charged beyond the base distance.
    pub additional_intervals: u64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the distance fee for a delivery.
///
/// Partial intervals round up: with the default tariff 1499 m and 1500 m
/// both cost 300 cents and 1501 m costs 400 cents.
///
/// # Arguments
///
/// * `delivery_distance` - The delivery distance in meters
/// * `config` - The distance fee settings
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use delivery_fee_engine::calculation::calculate_distance_fee;
/// use delivery_fee_engine::config::DistanceFeeConfig;
///
/// let config = DistanceFeeConfig::default();
/// assert_eq!(calculate_distance_fee(1000, &config, 1).fee, 200);
/// assert_eq!(calculate_distance_fee(1501, &config, 1).fee, 400);
/// ```
pub fn calculate_distance_fee(
    delivery_distance: u64,
    config: &DistanceFeeConfig,
    step_number: u32,
) -> DistanceFeeResult {
    let excess_distance = delivery_distance.saturating_sub(config.base_distance);
    let additional_intervals = started_intervals(delivery_distance, config);
    let fee = fee_for_intervals(additional_intervals, config);

    let reasoning = if additional_intervals == 0 {
        format!(
            "{} m is within the base distance of {} m - base fee {}",
            delivery_distance, config.base_distance, config.base_fee
        )
    } else {
        format!(
            "{} + {} x {} started intervals of {} m beyond {} m = {}",
            config.base_fee,
            config.fee_per_additional_interval,
            additional_intervals,
            config.additional_interval,
            config.base_distance,
            fee
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "distance_fee".to_string(),
        rule_name: "Distance Fee".to_string(),
        input: serde_json::json!({
            "delivery_distance": delivery_distance,
            "base_distance": config.base_distance,
            "additional_interval": config.additional_interval
        }),
        output: serde_json::json!({
            "excess_distance": excess_distance,
            "additional_intervals": additional_intervals,
            "distance_fee": fee
        }),
        reasoning,
    };

    DistanceFeeResult {
        fee,
        additional_intervals,
        audit_step,
    }
}

/// Distance fee in cents, without the audit step.
pub(crate) fn distance_fee_amount(delivery_distance: u64, config: &DistanceFeeConfig) -> u64 {
    fee_for_intervals(started_intervals(delivery_distance, config), config)
}

fn started_intervals(delivery_distance: u64, config: &DistanceFeeConfig) -> u64 {
    let excess_distance = delivery_distance.saturating_sub(config.base_distance);
    // ConfigLoader rejects a zero interval.
    excess_distance.div_ceil(config.additional_interval.max(1))
}

fn fee_for_intervals(additional_intervals: u64, config: &DistanceFeeConfig) -> u64 {
    let additional_fee = config
        .fee_per_additional_interval
        .saturating_mul(additional_intervals);
    config.base_fee.saturating_add(additional_fee)
}
