//! Free delivery check.

use crate::config::FeeLimits;
use crate::models::AuditStep;

/// The result of the free delivery check.
#[derive(Debug, Clone)]
pub struct FreeDeliveryResult {
    /// Whether the cart qualifies for free delivery.
    pub free_delivery: bool,
    /// The audit step recording this check.
    pub audit_step: AuditStep,
}

/// Checks whether `cart_value` reaches the free delivery threshold.
///
/// The threshold is inclusive: a cart worth exactly the threshold ships free.
///
/// # Examples
///
/// ```
/// use delivery_fee_engine::calculation::check_free_delivery;
/// use delivery_fee_engine::config::FeeLimits;
///
/// let limits = FeeLimits::default();
/// assert!(check_free_delivery(20000, &limits, 1).free_delivery);
/// assert!(!check_free_delivery(19999, &limits, 1).free_delivery);
/// ```
pub fn check_free_delivery(
    cart_value: u64,
    limits: &FeeLimits,
    step_number: u32,
) -> FreeDeliveryResult {
    let free_delivery = qualifies_for_free_delivery(cart_value, limits);

    let reasoning = if free_delivery {
        format!(
            "Cart value {} reaches the free delivery threshold of {} - fee is 0",
            cart_value, limits.free_delivery_threshold
        )
    } else {
        format!(
            "Cart value {} is below the free delivery threshold of {}",
            cart_value, limits.free_delivery_threshold
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "free_delivery".to_string(),
        rule_name: "Free Delivery".to_string(),
        input: serde_json::json!({
            "cart_value": cart_value,
            "free_delivery_threshold": limits.free_delivery_threshold
        }),
        output: serde_json::json!({
            "free_delivery": free_delivery
        }),
        reasoning,
    };

    FreeDeliveryResult {
        free_delivery,
        audit_step,
    }
}

pub(crate) fn qualifies_for_free_delivery(cart_value: u64, limits: &FeeLimits) -> bool {
    cart_value >= limits.free_delivery_threshold
}
