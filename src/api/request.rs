//! Request parsing and validation for the Delivery Fee Engine API.
//!
//! The `POST /` body is parsed into an untyped JSON value first and then
//! validated field by field, so a single response can report every offending
//! field instead of stopping at the first serde error.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use crate::models::Order;

/// Message for a field absent from the request body.
pub const FIELD_REQUIRED: &str = "Field required";
/// Message for a value that is not a JSON integer.
pub const INVALID_INTEGER: &str = "Input should be a valid integer";
/// Message for an integer below the minimum of 1.
pub const BELOW_MINIMUM: &str = "Input should be greater than or equal to 1";
/// Message for an integer literal beyond the `u64` range.
pub const ABOVE_MAXIMUM: &str = "Input should be less than or equal to 18446744073709551615";
/// Message for a `time` value that is not a recognised datetime.
pub const INVALID_DATETIME: &str = "Input should be a valid datetime";
/// Message for a body that is not a JSON object.
pub const INVALID_BODY: &str = "Input should be a valid JSON object";

/// Key under which body-level problems are reported.
pub const BODY_KEY: &str = "body";

const MINIMUM_VALUE: u64 = 1;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field-level validation failures, keyed by field name.
pub type ValidationErrors = BTreeMap<String, String>;

/// Builds a [`ValidationErrors`] map holding a single body-level message.
pub fn body_error(message: impl Into<String>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.insert(BODY_KEY.to_string(), message.into());
    errors
}

/// Parses and validates a `POST /` body into an [`Order`].
///
/// Either every field is valid and an `Order` is returned, or the full set of
/// field errors is. Unknown fields are ignored.
///
/// # Examples
///
/// ```
/// use delivery_fee_engine::api::parse_order;
/// use serde_json::json;
///
/// let order = parse_order(&json!({
///     "cart_value": 790,
///     "delivery_distance": 2235,
///     "number_of_items": 4,
///     "time": "2024-01-15T13:00:00Z"
/// }))
/// .unwrap();
/// assert_eq!(order.cart_value, 790);
///
/// let errors = parse_order(&json!({ "cart_value": "790" })).unwrap_err();
/// assert_eq!(errors["cart_value"], "Input should be a valid integer");
/// assert_eq!(errors["time"], "Field required");
/// ```
pub fn parse_order(body: &Value) -> Result<Order, ValidationErrors> {
    let Some(fields) = body.as_object() else {
        return Err(body_error(INVALID_BODY));
    };

    let mut errors = ValidationErrors::new();

    let cart_value = validate_positive_integer(fields, "cart_value", &mut errors);
    let delivery_distance = validate_positive_integer(fields, "delivery_distance", &mut errors);
    let number_of_items = validate_positive_integer(fields, "number_of_items", &mut errors);
    let time = validate_datetime(fields, "time", &mut errors);

    match (cart_value, delivery_distance, number_of_items, time) {
        (Some(cart_value), Some(delivery_distance), Some(number_of_items), Some(time)) => {
            Ok(Order {
                cart_value,
                delivery_distance,
                number_of_items,
                time,
            })
        }
        _ => Err(errors),
    }
}

fn validate_positive_integer(
    fields: &Map<String, Value>,
    name: &str,
    errors: &mut ValidationErrors,
) -> Option<u64> {
    let result = match fields.get(name) {
        None => Err(FIELD_REQUIRED),
        Some(value) => parse_positive_integer(value),
    };

    result
        .map_err(|message| errors.insert(name.to_string(), message.to_string()))
        .ok()
}

fn parse_positive_integer(value: &Value) -> Result<u64, &'static str> {
    let Value::Number(number) = value else {
        return Err(INVALID_INTEGER);
    };

    if let Some(unsigned) = number.as_u64() {
        if unsigned < MINIMUM_VALUE {
            return Err(BELOW_MINIMUM);
        }
        Ok(unsigned)
    } else if number.is_i64() {
        // Only negative values fail as_u64 while passing is_i64.
        Err(BELOW_MINIMUM)
    } else {
        // Integer literals outside the 64-bit range arrive as whole floats.
        match number.as_f64() {
            Some(float) if float.fract() == 0.0 && float >= u64::MAX as f64 => Err(ABOVE_MAXIMUM),
            Some(float) if float.fract() == 0.0 && float <= i64::MIN as f64 => Err(BELOW_MINIMUM),
            _ => Err(INVALID_INTEGER),
        }
    }
}

fn validate_datetime(
    fields: &Map<String, Value>,
    name: &str,
    errors: &mut ValidationErrors,
) -> Option<DateTime<FixedOffset>> {
    let result = match fields.get(name) {
        None => Err(FIELD_REQUIRED),
        Some(Value::String(text)) => parse_datetime(text).ok_or(INVALID_DATETIME),
        Some(_) => Err(INVALID_DATETIME),
    };

    result
        .map_err(|message| errors.insert(name.to_string(), message.to_string()))
        .ok()
}

/// Parses an order timestamp.
///
/// Accepts the ISO 8601 forms clients send:
/// - RFC 3339, and date-times with a `+hh:mm` or `+hhmm` offset, which keep
///   that offset
/// - date-times ending in `Z`, or with no offset at all, taken as UTC
/// - a bare date, taken as midnight UTC
///
/// Date and time may be separated by `T` or a space. Seconds and fractional
/// seconds are optional.
///
/// # Examples
///
/// ```
/// use delivery_fee_engine::api::parse_datetime;
/// use chrono::Timelike;
///
/// assert_eq!(parse_datetime("2024-01-26T15:30:00+02:00").unwrap().hour(), 15);
/// assert_eq!(parse_datetime("2024-01-26T15:00:00").unwrap().hour(), 15);
/// assert_eq!(parse_datetime("2024-01-26T15:00+0200").unwrap().hour(), 15);
/// assert_eq!(parse_datetime("2024-01-26").unwrap().hour(), 0);
/// assert!(parse_datetime("2024-01-36T15:00:00").is_none());
/// ```
pub fn parse_datetime(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed);
    }

    if let Some(parsed) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(text, format).ok())
    {
        return Some(parsed);
    }

    let naive_text = text.strip_suffix(['Z', 'z']).unwrap_or(text);
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(naive_text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc().fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Weekday};
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "cart_value": 1500,
            "delivery_distance": 1000,
            "number_of_items": 3,
            "time": "2024-01-26T15:00:00Z"
        })
    }

    fn errors_for(body: Value) -> ValidationErrors {
        parse_order(&body).unwrap_err()
    }

    #[test]
    fn test_valid_body_parses() {
        let order = parse_order(&valid_body()).unwrap();

        assert_eq!(order.cart_value, 1500);
        assert_eq!(order.delivery_distance, 1000);
        assert_eq!(order.number_of_items, 3);
        assert_eq!(order.weekday(), Weekday::Fri);
        assert_eq!(order.hour(), 15);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut body = valid_body();
        body["coupon"] = json!("FREE");
        assert!(parse_order(&body).is_ok());
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let errors = errors_for(json!({
            "delivery_distance": 1000,
            "number_of_items": 8
        }));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors["cart_value"], FIELD_REQUIRED);
        assert_eq!(errors["time"], FIELD_REQUIRED);
    }

    #[test]
    fn test_every_invalid_field_is_reported() {
        let errors = errors_for(json!({
            "cart_value": "1500",
            "delivery_distance": -1,
            "number_of_items": 0,
            "time": "2024-01-36T15:00:00"
        }));

        assert_eq!(errors.len(), 4);
        assert_eq!(errors["cart_value"], INVALID_INTEGER);
        assert_eq!(errors["delivery_distance"], BELOW_MINIMUM);
        assert_eq!(errors["number_of_items"], BELOW_MINIMUM);
        assert_eq!(errors["time"], INVALID_DATETIME);
    }

    #[test]
    fn test_missing_and_invalid_fields_together() {
        let errors = errors_for(json!({
            "delivery_distance": -1,
            "number_of_items": 8
        }));

        assert_eq!(errors["cart_value"], FIELD_REQUIRED);
        assert_eq!(errors["delivery_distance"], BELOW_MINIMUM);
        assert_eq!(errors["time"], FIELD_REQUIRED);
        assert!(!errors.contains_key("number_of_items"));
    }

    #[test]
    fn test_integers_are_not_coerced() {
        for value in [json!(true), json!(10.5), json!(10.0), json!("10"), json!(null), json!([10])] {
            let mut body = valid_body();
            body["number_of_items"] = value.clone();
            assert_eq!(
                errors_for(body)["number_of_items"],
                INVALID_INTEGER,
                "value {}",
                value
            );
        }
    }

    #[test]
    fn test_integer_beyond_u64_reports_maximum() {
        let body: Value = serde_json::from_str(
            r#"{"cart_value": 100000000000000000000, "delivery_distance": -100000000000000000000,
                "number_of_items": 3, "time": "2024-01-26T15:00:00Z"}"#,
        )
        .unwrap();
        let errors = errors_for(body);

        assert_eq!(errors["cart_value"], ABOVE_MAXIMUM);
        assert_eq!(errors["delivery_distance"], BELOW_MINIMUM);
    }

    #[test]
    fn test_largest_u64_is_accepted() {
        let mut body = valid_body();
        body["cart_value"] = json!(u64::MAX);
        assert_eq!(parse_order(&body).unwrap().cart_value, u64::MAX);
    }

    #[test]
    fn test_minimum_value_is_accepted() {
        let body = json!({
            "cart_value": 1,
            "delivery_distance": 1,
            "number_of_items": 1,
            "time": "2024-01-26T15:00:00Z"
        });
        assert!(parse_order(&body).is_ok());
    }

    #[test]
    fn test_non_string_time_is_invalid() {
        let mut body = valid_body();
        body["time"] = json!(1706281200);
        assert_eq!(errors_for(body)["time"], INVALID_DATETIME);
    }

    #[test]
    fn test_non_object_body_is_a_body_error() {
        for body in [json!([1, 2, 3]), json!("order"), json!(null)] {
            let errors = errors_for(body);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[BODY_KEY], INVALID_BODY);
        }
    }

    #[test]
    fn test_rfc3339_keeps_offset() {
        let time = parse_datetime("2024-01-26T15:30:00+02:00").unwrap();
        assert_eq!(time.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(time.hour(), 15);
    }

    #[test]
    fn test_naive_datetime_is_utc() {
        let time = parse_datetime("2024-01-26T15:00:00").unwrap();
        assert_eq!(time.offset().local_minus_utc(), 0);
        assert_eq!(time.weekday(), Weekday::Fri);
        assert_eq!(time.hour(), 15);
    }

    #[test]
    fn test_naive_datetime_variants() {
        assert!(parse_datetime("2024-01-26 15:00:00").is_some());
        assert!(parse_datetime("2024-01-26T15:00:00.250").is_some());
        assert!(parse_datetime("2024-01-26T15:00:00.250Z").is_some());
    }

    #[test]
    fn test_datetimes_without_seconds() {
        let naive = parse_datetime("2024-01-26T15:00").unwrap();
        assert_eq!(naive.offset().local_minus_utc(), 0);
        assert_eq!((naive.hour(), naive.minute()), (15, 0));

        let zulu = parse_datetime("2024-01-26T15:00Z").unwrap();
        assert_eq!(zulu, naive);

        let spaced = parse_datetime("2024-01-26 15:00").unwrap();
        assert_eq!(spaced, naive);

        let offset = parse_datetime("2024-01-26T15:00+02:00").unwrap();
        assert_eq!(offset.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(offset.hour(), 15);
    }

    #[test]
    fn test_compact_offset_keeps_offset() {
        let time = parse_datetime("2024-01-26T15:00:00+0200").unwrap();
        assert_eq!(time.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(time.hour(), 15);

        let west = parse_datetime("2024-01-26T15:00-0530").unwrap();
        assert_eq!(west.offset().local_minus_utc(), -(5 * 3600 + 30 * 60));
        assert_eq!(west.weekday(), Weekday::Fri);
    }

    #[test]
    fn test_bare_date_is_midnight_utc() {
        let time = parse_datetime("2024-01-26").unwrap();
        assert_eq!(time.offset().local_minus_utc(), 0);
        assert_eq!(time.weekday(), Weekday::Fri);
        assert_eq!((time.hour(), time.minute(), time.second()), (0, 0, 0));
    }

    #[test]
    fn test_invalid_datetimes() {
        for text in [
            "",
            "tomorrow",
            "2024-13-01T00:00:00",
            "2024-01-26T25:00",
            "2024-01-26T15",
            "2024-01-26Z",
            "26/01/2024 15:00",
        ] {
            assert!(parse_datetime(text).is_none(), "{:?} should not parse", text);
        }
    }
}
