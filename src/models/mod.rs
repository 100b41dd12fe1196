//! Core data models for the shift pay engine.
//!
//! This module contains all the domain models used throughout the engine.

mod clock_time;
mod pay_breakdown;
mod shift;
mod shift_entry;
mod working_time;

pub use clock_time::{
    ClockTime, MINUTES_PER_DAY, elapsed_minutes, extended_interval, format_duration, parse_time,
};
pub use pay_breakdown::{NightHoursResult, PayBreakdown};
pub use shift::{BreakWindow, ShiftDefinition, ShiftKind};
pub use shift_entry::{ShiftEntry, ShiftRequest};
pub use working_time::{BreakDetails, TakenBreak, WorkingTime};
