//! Shift input validation.
//!
//! [`validate_shift`] checks raw user input before any pay is calculated.
//! Every problem is collected rather than returned early, so a caller can
//! show all of them at once. Warnings flag unusual but payable shifts.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::config::ShiftCatalog;
use crate::models::{ClockTime, ShiftKind, elapsed_minutes, parse_time};

/// Shortest payable shift.
pub const MIN_SHIFT_MINUTES: u32 = 60;

/// Longest payable shift.
pub const MAX_SHIFT_MINUTES: u32 = 16 * 60;

/// How far past its nominal length a shift may run before a warning.
pub const NOMINAL_OVERRUN_WARNING_MINUTES: u32 = 120;

/// Which time input a [`ValidationError::InvalidTime`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeField {
    /// The start time.
    Start,
    /// The end time.
    End,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeField::Start => write!(f, "start time"),
            TimeField::End => write!(f, "end time"),
        }
    }
}

/// A reason a shift request cannot be paid.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationError {
    /// No shift type was given.
    #[error("Please select a shift type")]
    MissingShiftType,

    /// No start time was given.
    #[error("Please enter start time")]
    MissingStartTime,

    /// No end time was given.
    #[error("Please enter end time")]
    MissingEndTime,

    /// The shift type is not in the catalog.
    #[error("Unknown shift type: {code}")]
    UnknownShiftType {
        /// The code that was given.
        code: String,
    },

    /// A time could not be parsed as `HH:MM`.
    #[error("Invalid {field} '{value}': expected HH:MM")]
    InvalidTime {
        /// Which input was malformed.
        field: TimeField,
        /// The rejected input.
        value: String,
    },

    /// The shift is shorter than an hour.
    #[error("Shift must be at least 1 hour")]
    DurationTooShort {
        /// Elapsed minutes.
        minutes: u32,
    },

    /// The shift is longer than sixteen hours.
    #[error("Shift cannot exceed 16 hours")]
    DurationTooLong {
        /// Elapsed minutes.
        minutes: u32,
    },
}

/// An unusual but payable shift.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationWarning {
    /// The shift ran well past the shift type's default schedule.
    #[error("Shift runs {minutes} minutes against a nominal {nominal_minutes}")]
    ExceedsNominalLength {
        /// Elapsed minutes.
        minutes: u32,
        /// Length of the default schedule.
        nominal_minutes: u32,
    },

    /// A day shift ended on the following calendar day.
    #[error("Day shift {code} crosses midnight")]
    DayShiftCrossesMidnight {
        /// The shift code.
        code: String,
    },
}

/// Outcome of [`validate_shift`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// True when `errors` is empty.
    pub is_valid: bool,
    /// Every error found, in check order.
    pub errors: Vec<ValidationError>,
    /// Warnings; never affect `is_valid`.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Display strings for every error.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

fn parse_field(
    value: &str,
    field: TimeField,
    missing: ValidationError,
    errors: &mut Vec<ValidationError>,
) -> Option<ClockTime> {
    let value = value.trim();
    if value.is_empty() {
        errors.push(missing);
        return None;
    }
    match parse_time(value) {
        Ok(time) => Some(time),
        Err(_) => {
            errors.push(ValidationError::InvalidTime {
                field,
                value: value.to_string(),
            });
            None
        }
    }
}

/// Validates raw shift input against `catalog`.
///
/// Empty strings count as missing. Elapsed time wraps past midnight when
/// the end is earlier than the start; equal times are zero minutes long.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::validate_shift;
/// use shiftpay_engine::config::ShiftCatalog;
///
/// let catalog = ShiftCatalog::builtin();
///
/// assert!(validate_shift(&catalog, "C341", "06:30", "17:30").is_valid);
///
/// let result = validate_shift(&catalog, "", "", "");
/// assert_eq!(
///     result.messages(),
///     vec![
///         "Please select a shift type",
///         "Please enter start time",
///         "Please enter end time",
///     ]
/// );
/// ```
pub fn validate_shift(
    catalog: &ShiftCatalog,
    shift_type: &str,
    start: &str,
    end: &str,
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let code = shift_type.trim();
    let definition = if code.is_empty() {
        errors.push(ValidationError::MissingShiftType);
        None
    } else {
        let definition = catalog.get(code);
        if definition.is_none() {
            errors.push(ValidationError::UnknownShiftType {
                code: code.to_string(),
            });
        }
        definition
    };

    let start = parse_field(
        start,
        TimeField::Start,
        ValidationError::MissingStartTime,
        &mut errors,
    );
    let end = parse_field(end, TimeField::End, ValidationError::MissingEndTime, &mut errors);

    if let (Some(start), Some(end)) = (start, end) {
        let minutes = elapsed_minutes(start, end);

        if minutes < MIN_SHIFT_MINUTES {
            errors.push(ValidationError::DurationTooShort { minutes });
        }
        if minutes > MAX_SHIFT_MINUTES {
            errors.push(ValidationError::DurationTooLong { minutes });
        }

        if let Some(definition) = definition {
            let nominal_minutes = definition.nominal_minutes();
            if minutes > nominal_minutes + NOMINAL_OVERRUN_WARNING_MINUTES {
                warnings.push(ValidationWarning::ExceedsNominalLength {
                    minutes,
                    nominal_minutes,
                });
            }
            if definition.kind == ShiftKind::Day && end < start {
                warnings.push(ValidationWarning::DayShiftCrossesMidnight {
                    code: definition.id.clone(),
                });
            }
        }
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}
