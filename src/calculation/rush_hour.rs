//! Rush hour adjustment.
//!
//! During the configured rush window (Friday 15:00-19:00 by default) the fee
//! is multiplied by the rush multiplier. The window is half-open and is read
//! in the offset the order time carries.
//!
//! The product is computed in exact decimal arithmetic and rounded to the
//! nearest cent, ties to even. With the default multiplier of 1.2 an exact
//! tie cannot occur; other multipliers can produce one (3 x 1.5 = 4.5 rounds
//! to 4, 5 x 1.5 = 7.5 rounds to 8).

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::RushHourConfig;
use crate::models::AuditStep;

/// The result of evaluating the rush hour rule.
#[derive(Debug, Clone)]
pub struct RushHourResult {
    /// The fee after the adjustment (unchanged outside the rush window).
    pub fee: u64,
    /// Whether the multiplier was applied.
    pub applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns true when `time` falls on the rush weekday inside the rush window.
///
/// # Examples
///
/// ```
/// use delivery_fee_engine::calculation::is_rush_hour;
/// use delivery_fee_engine::config::RushHourConfig;
/// use chrono::DateTime;
///
/// let config = RushHourConfig::default();
/// let friday_3pm = DateTime::parse_from_rfc3339("2024-01-26T15:00:00Z").unwrap();
/// let friday_7pm = DateTime::parse_from_rfc3339("2024-01-26T19:00:00Z").unwrap();
///
/// assert!(is_rush_hour(&friday_3pm, &config));
/// assert!(!is_rush_hour(&friday_7pm, &config));
/// ```
pub fn is_rush_hour(time: &DateTime<FixedOffset>, config: &RushHourConfig) -> bool {
    time.weekday() == config.weekday && (config.start_hour..config.end_hour).contains(&time.hour())
}

/// Multiplies `fee` by `multiplier` and rounds half to even.
///
/// Results that do not fit in `u64` saturate at `u64::MAX`.
fn multiply_fee(fee: u64, multiplier: Decimal) -> u64 {
    Decimal::from(fee)
        .checked_mul(multiplier)
        .map(|product| product.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven))
        .and_then(|rounded| rounded.to_u64())
        .unwrap_or(u64::MAX)
}

/// Applies the rush multiplier to an arbitrary fee.
///
/// Outside the rush window the fee is returned unchanged. The function has
/// no side effects; calling it on a fee that already went through the rush
/// adjustment multiplies it again.
///
/// # Examples
///
/// ```
/// use delivery_fee_engine::calculation::apply_rush_multiplier;
/// use delivery_fee_engine::config::RushHourConfig;
/// use chrono::DateTime;
///
/// let config = RushHourConfig::default();
/// let friday = DateTime::parse_from_rfc3339("2024-01-26T18:59:59Z").unwrap();
/// let monday = DateTime::parse_from_rfc3339("2024-01-22T16:00:00Z").unwrap();
///
/// assert_eq!(apply_rush_multiplier(360, &friday, &config), 432);
/// assert_eq!(apply_rush_multiplier(360, &monday, &config), 360);
/// ```
pub fn apply_rush_multiplier(
    fee: u64,
    time: &DateTime<FixedOffset>,
    config: &RushHourConfig,
) -> u64 {
    if is_rush_hour(time, config) {
        multiply_fee(fee, config.multiplier)
    } else {
        fee
    }
}

/// Evaluates the rush hour rule and records an audit step.
pub fn evaluate_rush_hour(
    fee: u64,
    time: &DateTime<FixedOffset>,
    config: &RushHourConfig,
    step_number: u32,
) -> RushHourResult {
    let applied = is_rush_hour(time, config);
    let adjusted_fee = apply_rush_multiplier(fee, time, config);

    let reasoning = if applied {
        format!(
            "{} {:02}:00 is inside the rush window {:02}:00-{:02}:00 - {} x {} = {}",
            time.weekday(),
            time.hour(),
            config.start_hour,
            config.end_hour,
            fee,
            config.multiplier.normalize(),
            adjusted_fee
        )
    } else {
        format!(
            "{} {:02}:00 is outside the {} rush window {:02}:00-{:02}:00 - fee unchanged",
            time.weekday(),
            time.hour(),
            config.weekday,
            config.start_hour,
            config.end_hour
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "rush_hour".to_string(),
        rule_name: "Rush Hour Multiplier".to_string(),
        input: serde_json::json!({
            "fee": fee,
            "time": time.to_rfc3339(),
            "weekday": time.weekday().to_string(),
            "hour": time.hour()
        }),
        output: serde_json::json!({
            "rush_hour_applied": applied,
            "multiplier": config.multiplier.normalize().to_string(),
            "fee": adjusted_fee
        }),
        reasoning,
    };

    RushHourResult {
        fee: adjusted_fee,
        applied,
        audit_step,
    }
}
