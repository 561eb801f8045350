//! Core data models for the Delivery Fee Engine.
//!
//! This module contains the domain models used throughout the engine.

mod fee_calculation;
mod order;

pub use fee_calculation::{AuditStep, AuditTrace, FeeCalculation, FeeComponents};
pub use order::Order;
