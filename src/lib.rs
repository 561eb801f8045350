//! Delivery Fee Engine
//!
//! This crate calculates the delivery fee for an order from its cart value,
//! delivery distance, item count and order time, and serves the calculation
//! over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
