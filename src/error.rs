//! Error types for the shift pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can surface to a caller. Business-rule
//! violations found by the validator are not errors in this sense; they are
//! collected as [`crate::calculation::ValidationError`] values and only turn
//! into [`EngineError::ValidationFailed`] when a caller asks for a full
//! calculation.

use thiserror::Error;

use crate::calculation::ValidationError;

/// The main error type for the shift pay engine.
///
/// # Example
///
/// ```
/// use shiftpay_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     value: "25:00".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time '25:00': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A time string did not match `HH:MM` or was out of range.
    #[error("Invalid time '{value}': expected HH:MM")]
    InvalidTimeFormat {
        /// The rejected input.
        value: String,
    },

    /// No shift definition exists for the given code.
    #[error("Unknown shift type: {code}")]
    UnknownShift {
        /// The shift code that was looked up.
        code: String,
    },

    /// A shift definition broke one of the catalog invariants.
    #[error("Invalid shift definition '{shift_id}': {message}")]
    InvalidShiftDefinition {
        /// The offending shift id.
        shift_id: String,
        /// What was wrong with it.
        message: String,
    },

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

    /// Configuration values parsed but are not usable.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the problem.
        message: String,
    },

    /// A shift request failed validation.
    #[error("Shift rejected: {}", join_errors(.errors))]
    ValidationFailed {
        /// Every violation found, in check order.
        errors: Vec<ValidationError>,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
