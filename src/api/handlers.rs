//! HTTP request handlers for the Delivery Fee Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::calculate_delivery_fee;

use super::request::{body_error, parse_order};
use super::response::{ApiErrorResponse, DeliveryFeeResponse, ValidationErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// Methods other than `POST` on `/` are answered with 405 by the router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(delivery_fee_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for `POST /`.
///
/// Validates the order and returns `{"delivery_fee": <cents>}`.
async fn delivery_fee_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing delivery fee request");

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            let message = match &rejection {
                JsonRejection::MissingJsonContentType(_) => {
                    "Content-Type must be application/json".to_string()
                }
                _ => format!("Invalid JSON: {}", rejection.body_text()),
            };
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Rejected request body"
            );
            return ValidationErrorResponse::new(body_error(message)).into_response();
        }
    };

    let order = match parse_order(&body) {
        Ok(order) => order,
        Err(errors) => {
            let fields: Vec<&String> = errors.keys().collect();
            warn!(
                correlation_id = %correlation_id,
                fields = ?fields,
                "Order failed validation"
            );
            return ValidationErrorResponse::new(errors).into_response();
        }
    };

    let start_time = Instant::now();
    match calculate_delivery_fee(&order, state.fee_config()) {
        Ok(calculation) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = %calculation.calculation_id,
                delivery_fee = calculation.delivery_fee,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Delivery fee calculated"
            );
            (
                StatusCode::OK,
                Json(DeliveryFeeResponse {
                    delivery_fee: calculation.delivery_fee,
                }),
            )
                .into_response()
        }
        Err(err) => {
            error!(
                correlation_id = %correlation_id,
                error = %err,
                "Delivery fee calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /health`.
async fn health_handler() -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
