//! Delivery fee calculation.
//!
//! Sequences the individual rules into the final fee:
//!
//! 1. Free delivery check (short-circuits to 0)
//! 2. Distance fee
//! 3. Small order surcharge
//! 4. Item surcharge (including the bulk fee)
//! 5. Rush hour adjustment on the sum
//! 6. Fee cap

use std::time::Instant;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::config::FeeConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, AuditTrace, FeeCalculation, FeeComponents, Order};

use super::distance_fee::{calculate_distance_fee, distance_fee_amount};
use super::fee_cap::{apply_fee_cap, cap_fee};
use super::free_delivery::{check_free_delivery, qualifies_for_free_delivery};
use super::item_surcharge::{calculate_item_surcharge, item_surcharge_amount};
use super::rush_hour::{apply_rush_multiplier, evaluate_rush_hour};
use super::small_order_surcharge::{calculate_small_order_surcharge, small_order_surcharge_amount};

/// Calculates the delivery fee for an order with the full breakdown.
///
/// # Errors
///
/// Returns `InvalidInput` if any integer field of the order is zero.
///
/// # Examples
///
/// ```
/// use delivery_fee_engine::calculation::calculate_delivery_fee;
/// use delivery_fee_engine::config::FeeConfig;
/// use delivery_fee_engine::models::Order;
/// use chrono::DateTime;
///
/// let order = Order {
///     cart_value: 790,
///     delivery_distance: 2235,
///     number_of_items: 4,
///     time: DateTime::parse_from_rfc3339("2024-01-15T13:00:00Z").unwrap(),
/// };
///
/// let calculation = calculate_delivery_fee(&order, &FeeConfig::default()).unwrap();
/// assert_eq!(calculation.delivery_fee, 710);
/// assert_eq!(calculation.components.distance_fee, 500);
/// assert_eq!(calculation.components.small_order_surcharge, 210);
/// ```
pub fn calculate_delivery_fee(order: &Order, config: &FeeConfig) -> EngineResult<FeeCalculation> {
    let start_time = Instant::now();
    order.ensure_valid()?;

    let mut steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    let free_delivery = check_free_delivery(order.cart_value, &config.limits, step_number);
    steps.push(free_delivery.audit_step);
    step_number += 1;

    if free_delivery.free_delivery {
        debug!(cart_value = order.cart_value, "Free delivery applied");
        return Ok(build_calculation(
            0,
            FeeComponents {
                free_delivery: true,
                ..FeeComponents::default()
            },
            steps,
            start_time,
        ));
    }

    let distance = calculate_distance_fee(order.delivery_distance, &config.distance, step_number);
    steps.push(distance.audit_step);
    step_number += 1;

    let small_order =
        calculate_small_order_surcharge(order.cart_value, &config.small_order, step_number);
    steps.push(small_order.audit_step);
    step_number += 1;

    let items = calculate_item_surcharge(order.number_of_items, &config.items, step_number);
    steps.push(items.audit_step);
    step_number += 1;

    let subtotal = distance
        .fee
        .saturating_add(small_order.surcharge)
        .saturating_add(items.surcharge);

    let rush = evaluate_rush_hour(subtotal, &order.time, &config.rush_hour, step_number);
    steps.push(rush.audit_step);
    step_number += 1;

    let cap = apply_fee_cap(rush.fee, &config.limits, step_number);
    steps.push(cap.audit_step);

    debug!(
        distance_fee = distance.fee,
        small_order_surcharge = small_order.surcharge,
        item_surcharge = items.surcharge,
        subtotal,
        rush_hour_applied = rush.applied,
        cap_applied = cap.cap_applied,
        delivery_fee = cap.fee,
        "Delivery fee calculated"
    );

    let components = FeeComponents {
        distance_fee: distance.fee,
        small_order_surcharge: small_order.surcharge,
        item_surcharge: items.surcharge,
        bulk_fee: items.bulk_fee,
        subtotal,
        rush_adjusted_fee: rush.fee,
        free_delivery: false,
        rush_hour_applied: rush.applied,
        cap_applied: cap.cap_applied,
    };

    Ok(build_calculation(cap.fee, components, steps, start_time))
}

/// Calculates the delivery fee for an order in cents.
///
/// Applies the same rules in the same order as [`calculate_delivery_fee`] but
/// builds no audit trace, id or timestamp. Use [`calculate_delivery_fee`] when
/// the breakdown is needed.
///
/// # Errors
///
/// Returns `InvalidInput` if any integer field of the order is zero.
pub fn calculate_total_delivery_fee(order: &Order, config: &FeeConfig) -> EngineResult<u64> {
    order.ensure_valid()?;

    if qualifies_for_free_delivery(order.cart_value, &config.limits) {
        return Ok(0);
    }

    let subtotal = distance_fee_amount(order.delivery_distance, &config.distance)
        .saturating_add(small_order_surcharge_amount(order.cart_value, &config.small_order))
        .saturating_add(item_surcharge_amount(order.number_of_items, &config.items));
    let fee = apply_rush_multiplier(subtotal, &order.time, &config.rush_hour);

    Ok(cap_fee(fee, &config.limits))
}

fn build_calculation(
    delivery_fee: u64,
    components: FeeComponents,
    steps: Vec<AuditStep>,
    start_time: Instant,
) -> FeeCalculation {
    FeeCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        delivery_fee,
        components,
        audit_trace: AuditTrace {
            steps,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}
