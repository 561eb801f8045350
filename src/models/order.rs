//! Order model.
//!
//! This module defines the validated [`Order`] the fee calculator consumes.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A single order awaiting a delivery fee.
///
/// All integer fields must be at least 1. The API layer guarantees this
/// before constructing an `Order`; [`Order::ensure_valid`] re-checks it so the
/// calculator can fail loudly rather than price a malformed order.
///
/// `time` keeps the offset it was given in. Weekday and hour are read in
/// that offset, so `2024-01-26T15:30:00+02:00` is Friday, hour 15, even
/// though it is 13:30 in UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Total value of the cart in cents.
    pub cart_value: u64,
    /// Delivery distance in meters.
    pub delivery_distance: u64,
    /// Number of items in the order.
    pub number_of_items: u64,
    /// When the order is placed.
    pub time: DateTime<FixedOffset>,
}

impl Order {
    /// Returns the day of week in the order's own offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_fee_engine::models::Order;
    /// use chrono::{DateTime, Weekday};
    ///
    /// let order = Order {
    ///     cart_value: 1500,
    ///     delivery_distance: 1000,
    ///     number_of_items: 3,
    ///     time: DateTime::parse_from_rfc3339("2024-01-26T15:00:00Z").unwrap(),
    /// };
    /// assert_eq!(order.weekday(), Weekday::Fri);
    /// ```
    pub fn weekday(&self) -> Weekday {
        self.time.weekday()
    }

    /// Returns the hour of day (0-23) in the order's own offset.
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Checks the order invariants.
    ///
    /// Returns `InvalidInput` naming the first field that is zero.
    pub fn ensure_valid(&self) -> EngineResult<()> {
        let fields = [
            ("cart_value", self.cart_value),
            ("delivery_distance", self.delivery_distance),
            ("number_of_items", self.number_of_items),
        ];

        match fields.iter().find(|(_, value)| *value == 0) {
            Some((field, _)) => Err(EngineError::InvalidInput {
                field: field.to_string(),
                message: "must be at least 1".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_order(time: &str) -> Order {
        Order {
            cart_value: 1500,
            delivery_distance: 1000,
            number_of_items: 3,
            time: DateTime::parse_from_rfc3339(time).unwrap(),
        }
    }

    #[test]
    fn test_weekday_and_hour_in_utc() {
        let order = create_test_order("2024-01-26T15:00:00Z");
        assert_eq!(order.weekday(), Weekday::Fri);
        assert_eq!(order.hour(), 15);
    }

    #[test]
    fn test_weekday_and_hour_use_given_offset() {
        // 2024-01-26T23:30:00-05:00 is Saturday 04:30 in UTC
        let order = create_test_order("2024-01-26T23:30:00-05:00");
        assert_eq!(order.weekday(), Weekday::Fri);
        assert_eq!(order.hour(), 23);
    }

    #[test]
    fn test_offset_east_of_utc_keeps_local_fields() {
        // 13:30 UTC, 15:30 local
        let order = create_test_order("2024-01-26T15:30:00+02:00");
        assert_eq!(order.weekday(), Weekday::Fri);
        assert_eq!(order.hour(), 15);
    }

    #[test]
    fn test_valid_order_passes() {
        assert!(create_test_order("2024-01-15T13:00:00Z").ensure_valid().is_ok());
    }

    #[test]
    fn test_zero_cart_value_is_invalid() {
        let mut order = create_test_order("2024-01-15T13:00:00Z");
        order.cart_value = 0;

        match order.ensure_valid() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "cart_value"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_distance_is_invalid() {
        let mut order = create_test_order("2024-01-15T13:00:00Z");
        order.delivery_distance = 0;

        match order.ensure_valid() {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "delivery_distance")
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_items_is_invalid() {
        let mut order = create_test_order("2024-01-15T13:00:00Z");
        order.number_of_items = 0;

        match order.ensure_valid() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "number_of_items"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_order_serialization_preserves_offset() {
        let order = create_test_order("2024-01-26T15:30:00+02:00");
        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("+02:00"));

        let deserialized: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.hour(), 15);
    }
}
