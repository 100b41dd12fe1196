//! Shift request and calculated shift entry models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::clock_time::ClockTime;
use super::pay_breakdown::PayBreakdown;
use super::working_time::WorkingTime;

/// Raw user input for one shift.
///
/// Times are kept as entered so the validator can report missing or
/// malformed values alongside every other problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Shift code from the catalog (e.g. "C341").
    pub shift_type: String,
    /// Start time as `HH:MM`.
    pub start_time: String,
    /// End time as `HH:MM`; earlier than the start means next day.
    pub end_time: String,
    /// The calendar date the shift started on.
    pub work_date: NaiveDate,
}

impl ShiftRequest {
    /// Creates a request from borrowed parts.
    pub fn new(shift_type: &str, start_time: &str, end_time: &str, work_date: NaiveDate) -> Self {
        Self {
            shift_type: shift_type.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            work_date,
        }
    }
}

/// A fully calculated shift, ready to hand to storage or charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEntry {
    /// Unique identifier for this entry.
    pub id: Uuid,
    /// Shift code the entry was calculated against.
    pub shift_type: String,
    /// Actual start time.
    pub start_time: ClockTime,
    /// Actual end time.
    pub end_time: ClockTime,
    /// The calendar date the shift started on.
    pub work_date: NaiveDate,
    /// Elapsed, break and net time.
    pub working_time: WorkingTime,
    /// Pay split.
    pub pay: PayBreakdown,
    /// When the calculation was made.
    pub timestamp: DateTime<Utc>,
}
