//! Response types for the Delivery Fee Engine API.
//!
//! This module defines the success body, the validation error body and the
//! engine error mapping for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::request::ValidationErrors;

/// Success body for `POST /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryFeeResponse {
    /// The delivery fee in cents.
    pub delivery_fee: u64,
}

/// Body returned with HTTP 400 when the request fails validation.
///
/// Serializes as `{"Validation Error": {"<field>": "<message>", ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    /// Offending fields and their messages.
    #[serde(rename = "Validation Error")]
    pub errors: ValidationErrors,
}

impl ValidationErrorResponse {
    /// Wraps a set of field errors.
    pub fn new(errors: ValidationErrors) -> Self {
        Self { errors }
    }
}

impl IntoResponse for ValidationErrorResponse {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let details = error.to_string();
        let error = match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiError::with_details("CONFIG_ERROR", "Configuration error", details)
            }
            EngineError::InvalidConfig { .. } => {
                ApiError::with_details("CONFIG_ERROR", "Invalid fee configuration", details)
            }
            // Orders are validated before they reach the calculator, so a
            // rejected order here is a server fault.
            EngineError::InvalidInput { .. } => {
                ApiError::with_details("CALCULATION_ERROR", "Calculation failed", details)
            }
        };

        ApiErrorResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }
}
