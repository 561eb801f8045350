//! Item count surcharge calculation.
//!
//! Two independent parts make up the item surcharge:
//! - a per-item charge for every item from the surcharge threshold onward
//!   (the threshold item itself included), and
//! - a flat bulk fee once the item count exceeds the bulk threshold.

use crate::config::ItemSurchargeConfig;
use crate::models::AuditStep;

/// The result of the item surcharge calculation.
#[derive(Debug, Clone)]
pub struct ItemSurchargeResult {
    /// The total item surcharge in cents (per-item part plus bulk fee).
    pub surcharge: u64,
    /// Number of items charged individually.
    pub surcharged_items: u64,
    /// The per-item part of the surcharge.
    pub per_item_surcharge: u64,
    /// The bulk fee part of the surcharge (zero when not applicable).
    pub bulk_fee: u64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the item surcharge for an order.
///
/// With the default tariff (threshold 5, 50 cents per item, bulk fee of
/// 120 cents above 12 items):
///
/// | items | surcharged items | surcharge |
/// |-------|------------------|-----------|
/// | 4     | 0                | 0         |
/// | 5     | 1                | 50        |
/// | 12    | 8                | 400       |
/// | 13    | 9                | 570       |
///
/// # Examples
///
/// ```
/// use delivery_fee_engine::calculation::calculate_item_surcharge;
/// use delivery_fee_engine::config::ItemSurchargeConfig;
///
/// let config = ItemSurchargeConfig::default();
/// let result = calculate_item_surcharge(13, &config, 1);
/// assert_eq!(result.per_item_surcharge, 450);
/// assert_eq!(result.bulk_fee, 120);
/// assert_eq!(result.surcharge, 570);
/// ```
pub fn calculate_item_surcharge(
    number_of_items: u64,
    config: &ItemSurchargeConfig,
    step_number: u32,
) -> ItemSurchargeResult {
    let surcharged_items = surcharged_item_count(number_of_items, config);
    let per_item_surcharge = config.charge_per_item.saturating_mul(surcharged_items);

    let bulk_applied = number_of_items > config.bulk_threshold;
    let bulk_fee = bulk_fee_for(number_of_items, config);

    let surcharge = per_item_surcharge.saturating_add(bulk_fee);

    let mut reasoning = if surcharged_items > 0 {
        format!(
            "{} items from item {} onward x {} = {}",
            surcharged_items, config.surcharge_threshold, config.charge_per_item, per_item_surcharge
        )
    } else {
        format!(
            "{} items is below the surcharge threshold of {} - no per-item surcharge",
            number_of_items, config.surcharge_threshold
        )
    };
    if bulk_applied {
        reasoning.push_str(&format!(
            "; more than {} items adds bulk fee {} = {}",
            config.bulk_threshold, config.bulk_fee, surcharge
        ));
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "item_surcharge".to_string(),
        rule_name: "Item Surcharge".to_string(),
        input: serde_json::json!({
            "number_of_items": number_of_items,
            "surcharge_threshold": config.surcharge_threshold,
            "bulk_threshold": config.bulk_threshold
        }),
        output: serde_json::json!({
            "surcharged_items": surcharged_items,
            "per_item_surcharge": per_item_surcharge,
            "bulk_fee_applied": bulk_applied,
            "bulk_fee": bulk_fee,
            "surcharge": surcharge
        }),
        reasoning,
    };

    ItemSurchargeResult {
        surcharge,
        surcharged_items,
        per_item_surcharge,
        bulk_fee,
        audit_step,
    }
}

/// Per-item charge plus bulk fee in cents, without the audit step.
pub(crate) fn item_surcharge_amount(number_of_items: u64, config: &ItemSurchargeConfig) -> u64 {
    config
        .charge_per_item
        .saturating_mul(surcharged_item_count(number_of_items, config))
        .saturating_add(bulk_fee_for(number_of_items, config))
}

fn surcharged_item_count(number_of_items: u64, config: &ItemSurchargeConfig) -> u64 {
    // Counting is inclusive: the threshold item is the first one charged.
    if number_of_items >= config.surcharge_threshold {
        number_of_items - config.surcharge_threshold.saturating_sub(1)
    } else {
        0
    }
}

fn bulk_fee_for(number_of_items: u64, config: &ItemSurchargeConfig) -> u64 {
    if number_of_items > config.bulk_threshold {
        config.bulk_fee
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surcharge_for(items: u64) -> u64 {
        calculate_item_surcharge(items, &ItemSurchargeConfig::default(), 1).surcharge
    }

    #[test]
    fn test_below_threshold_has_no_surcharge() {
        assert_eq!(surcharge_for(1), 0);
        assert_eq!(surcharge_for(4), 0);
    }

    #[test]
    fn test_threshold_item_is_charged() {
        assert_eq!(surcharge_for(5), 50);
    }

    #[test]
    fn test_each_item_past_threshold_adds_charge() {
        assert_eq!(surcharge_for(6), 100);
        assert_eq!(surcharge_for(10), 300);
    }

    #[test]
    fn test_bulk_threshold_itself_has_no_bulk_fee() {
        assert_eq!(surcharge_for(12), 400);
    }

    #[test]
    fn test_above_bulk_threshold_adds_bulk_fee() {
        assert_eq!(surcharge_for(13), 570);
        assert_eq!(surcharge_for(14), 620);
    }

    #[test]
    fn test_parts_are_reported_separately() {
        let result = calculate_item_surcharge(13, &ItemSurchargeConfig::default(), 1);

        assert_eq!(result.surcharged_items, 9);
        assert_eq!(result.per_item_surcharge, 450);
        assert_eq!(result.bulk_fee, 120);
    }

    #[test]
    fn test_bulk_fee_without_per_item_charge() {
        // Bulk threshold below the per-item threshold: only the bulk fee applies
        let config = ItemSurchargeConfig {
            surcharge_threshold: 10,
            charge_per_item: 50,
            bulk_threshold: 2,
            bulk_fee: 120,
        };
        let result = calculate_item_surcharge(3, &config, 1);

        assert_eq!(result.per_item_surcharge, 0);
        assert_eq!(result.bulk_fee, 120);
        assert_eq!(result.surcharge, 120);
    }

    #[test]
    fn test_threshold_of_one_charges_every_item() {
        let config = ItemSurchargeConfig {
            surcharge_threshold: 1,
            ..ItemSurchargeConfig::default()
        };
        assert_eq!(calculate_item_surcharge(3, &config, 1).surcharged_items, 3);
    }

    #[test]
    fn test_amount_matches_audited_surcharge() {
        let config = ItemSurchargeConfig::default();
        for items in [1, 4, 5, 12, 13, 100, u64::MAX] {
            assert_eq!(
                item_surcharge_amount(items, &config),
                calculate_item_surcharge(items, &config, 1).surcharge,
                "items {}",
                items
            );
        }
    }

    #[test]
    fn test_audit_reasoning_mentions_bulk_fee() {
        let result = calculate_item_surcharge(13, &ItemSurchargeConfig::default(), 4);

        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "item_surcharge");
        assert_eq!(result.audit_step.output["bulk_fee_applied"], true);
        assert_eq!(
            result.audit_step.reasoning,
            "9 items from item 5 onward x 50 = 450; more than 12 items adds bulk fee 120 = 570"
        );
    }

    #[test]
    fn test_audit_reasoning_below_threshold() {
        let result = calculate_item_surcharge(4, &ItemSurchargeConfig::default(), 1);

        assert_eq!(result.audit_step.output["surcharge"], 0);
        assert!(result.audit_step.reasoning.contains("no per-item surcharge"));
    }
}
