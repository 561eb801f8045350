//! HTTP API module for the Delivery Fee Engine.
//!
//! This module provides the `POST /` delivery fee endpoint and a
//! `GET /health` liveness probe.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ABOVE_MAXIMUM, BELOW_MINIMUM, BODY_KEY, FIELD_REQUIRED, INVALID_BODY, INVALID_DATETIME, INVALID_INTEGER,
    ValidationErrors, body_error, parse_datetime, parse_order,
};
pub use response::{ApiError, ApiErrorResponse, DeliveryFeeResponse, ValidationErrorResponse};
pub use state::AppState;
