//! Small order surcharge calculation.

use crate::config::SmallOrderConfig;
use crate::models::AuditStep;

/// The result of the small order surcharge calculation.
#[derive(Debug, Clone)]
pub struct SmallOrderSurchargeResult {
    /// The surcharge in cents.
    pub surcharge: u64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the surcharge for carts below the small order threshold.
///
/// The surcharge is the difference between the threshold and the cart value,
/// so cart value plus surcharge equals the threshold. Carts at or above the
/// threshold pay nothing.
///
/// # Examples
///
/// ```
/// use delivery_fee_engine::calculation::calculate_small_order_surcharge;
/// use delivery_fee_engine::config::SmallOrderConfig;
///
/// let config = SmallOrderConfig::default();
/// assert_eq!(calculate_small_order_surcharge(890, &config, 1).surcharge, 110);
/// assert_eq!(calculate_small_order_surcharge(1000, &config, 1).surcharge, 0);
/// ```
pub fn calculate_small_order_surcharge(
    cart_value: u64,
    config: &SmallOrderConfig,
    step_number: u32,
) -> SmallOrderSurchargeResult {
    let surcharge = small_order_surcharge_amount(cart_value, config);

    let reasoning = if surcharge > 0 {
        format!(
            "Cart value {} is below {} - surcharge {} - {} = {}",
            cart_value, config.threshold, config.threshold, cart_value, surcharge
        )
    } else {
        format!(
            "Cart value {} meets the small order threshold of {} - no surcharge",
            cart_value, config.threshold
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "small_order_surcharge".to_string(),
        rule_name: "Small Order Surcharge".to_string(),
        input: serde_json::json!({
            "cart_value": cart_value,
            "threshold": config.threshold
        }),
        output: serde_json::json!({
            "surcharge": surcharge,
            "surcharge_applied": surcharge > 0
        }),
        reasoning,
    };

    SmallOrderSurchargeResult {
        surcharge,
        audit_step,
    }
}

pub(crate) fn small_order_surcharge_amount(cart_value: u64, config: &SmallOrderConfig) -> u64 {
    config.threshold.saturating_sub(cart_value)
}
