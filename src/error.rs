//! Error types for the Delivery Fee Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while loading configuration or
//! computing a fee.

use thiserror::Error;

/// The main error type for the Delivery Fee Engine.
///
/// Request validation problems are not represented here; they are collected
/// by the API layer as [`crate::api::ValidationErrors`] before an order ever
/// reaches the calculator.
///
/// # Example
///
/// ```
/// use delivery_fee_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value is outside the range the calculator accepts.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The configuration field that was rejected.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// An order reached the calculator with a broken invariant.
    #[error("Invalid order field '{field}': {message}")]
    InvalidInput {
        /// The order field that broke its invariant.
        field: String,
        /// A description of the violated invariant.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
