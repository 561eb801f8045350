//! Calculation logic for the Delivery Fee Engine.
//!
//! Each fee rule lives in its own module and returns its amount together with
//! an [`AuditStep`](crate::models::AuditStep): distance fee, small order
//! surcharge, item surcharge, free delivery, rush hour and the fee cap.
//! [`calculate_delivery_fee`] sequences them into the final fee.

mod distance_fee;
mod fee_cap;
mod free_delivery;
mod item_surcharge;
mod rush_hour;
mod small_order_surcharge;
mod total_fee;

pub use distance_fee::{DistanceFeeResult, calculate_distance_fee};
pub use fee_cap::{FeeCapResult, apply_fee_cap};
pub use free_delivery::{FreeDeliveryResult, check_free_delivery};
pub use item_surcharge::{ItemSurchargeResult, calculate_item_surcharge};
pub use rush_hour::{RushHourResult, apply_rush_multiplier, evaluate_rush_hour, is_rush_hour};
pub use small_order_surcharge::{SmallOrderSurchargeResult, calculate_small_order_surcharge};
pub use total_fee::{calculate_delivery_fee, calculate_total_delivery_fee};
