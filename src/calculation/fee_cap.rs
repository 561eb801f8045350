//! Maximum fee cap.

use crate::config::FeeLimits;
use crate::models::AuditStep;

/// The result of applying the fee cap.
#[derive(Debug, Clone)]
pub struct FeeCapResult {
    /// The fee after the cap.
    pub fee: u64,
    /// Whether the fee was reduced to the cap.
    pub cap_applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Limits `fee` to the configured maximum.
///
/// # Examples
///
/// ```
/// use delivery_fee_engine::calculation::apply_fee_cap;
/// use delivery_fee_engine::config::FeeLimits;
///
/// let limits = FeeLimits::default();
/// assert_eq!(apply_fee_cap(1800, &limits, 1).fee, 1500);
/// assert_eq!(apply_fee_cap(1500, &limits, 1).fee, 1500);
/// assert_eq!(apply_fee_cap(710, &limits, 1).fee, 710);
/// ```
pub fn apply_fee_cap(fee: u64, limits: &FeeLimits, step_number: u32) -> FeeCapResult {
    let capped_fee = cap_fee(fee, limits);
    let cap_applied = capped_fee < fee;

    let reasoning = if cap_applied {
        format!("Fee {} exceeds the maximum of {} - capped", fee, limits.max_fee)
    } else {
        format!("Fee {} is within the maximum of {}", fee, limits.max_fee)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "fee_cap".to_string(),
        rule_name: "Maximum Fee".to_string(),
        input: serde_json::json!({
            "fee": fee,
            "max_fee": limits.max_fee
        }),
        output: serde_json::json!({
            "cap_applied": cap_applied,
            "fee": capped_fee
        }),
        reasoning,
    };

    FeeCapResult {
        fee: capped_fee,
        cap_applied,
        audit_step,
    }
}

pub(crate) fn cap_fee(fee: u64, limits: &FeeLimits) -> u64 {
    fee.min(limits.max_fee)
}
