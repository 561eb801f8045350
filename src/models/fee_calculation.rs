//! Fee calculation result models.
//!
//! This module contains the [`FeeCalculation`] type and its associated
//! structures that capture every output of a delivery fee calculation:
//! the final fee, the per-rule breakdown, and the audit trace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use delivery_fee_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 12,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Per-rule amounts that make up a delivery fee, all in cents.
///
/// When free delivery applies every amount is zero and only
/// `free_delivery` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeComponents {
    /// Base fee plus distance buckets.
    pub distance_fee: u64,
    /// Top-up for carts below the small order threshold.
    pub small_order_surcharge: u64,
    /// Item surcharge including the bulk fee.
    pub item_surcharge: u64,
    /// The bulk fee part of `item_surcharge`.
    pub bulk_fee: u64,
    /// Sum of the three surcharges before rush hour.
    pub subtotal: u64,
    /// Fee after the rush hour adjustment, before the cap.
    pub rush_adjusted_fee: u64,
    /// Whether the cart qualified for free delivery.
    pub free_delivery: bool,
    /// Whether the rush hour multiplier was applied.
    pub rush_hour_applied: bool,
    /// Whether the fee was reduced to the cap.
    pub cap_applied: bool,
}

/// The complete result of a delivery fee calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The final delivery fee in cents.
    pub delivery_fee: u64,
    /// Breakdown of the fee by rule.
    pub components: FeeComponents,
    /// Audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
