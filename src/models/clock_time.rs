//! Minute-precision wall-clock times and elapsed-time arithmetic.
//!
//! Shift times are entered as `HH:MM` with no date attached. An end time that
//! is earlier than the start time means the shift finished on the next day,
//! so every interval is mapped onto an "extended" timeline where the end may
//! exceed 24:00 (1440 minutes).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day with minute precision, stored as minutes since midnight.
///
/// # Example
///
/// ```
/// use shiftpay_engine::models::ClockTime;
///
/// let time: ClockTime = "16:45".parse().unwrap();
/// assert_eq!(time.minutes(), 1005);
/// assert_eq!(time.to_string(), "16:45");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u32);

impl ClockTime {
    /// Midnight.
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Builds a time from hour and minute, rejecting out-of-range values.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self(hour * 60 + minute))
    }

    /// Builds a time from a minute count, wrapping at 24 hours.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes % MINUTES_PER_DAY)
    }

    /// Builds a time from hour and minute, wrapping at 24 hours.
    pub const fn from_hm(hour: u32, minute: u32) -> Self {
        Self::from_minutes(hour * 60 + minute)
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        self.0
    }

    /// The hour component.
    pub fn hour(self) -> u32 {
        self.0 / 60
    }

    /// The minute component.
    pub fn minute(self) -> u32 {
        self.0 % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_time(&value)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// Parses an `HH:MM` string into a [`ClockTime`].
///
/// Both components must be exactly two ASCII digits, hours 00–23 and
/// minutes 00–59.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeFormat`] for anything else.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::models::parse_time;
///
/// assert_eq!(parse_time("06:30").unwrap().minutes(), 390);
/// assert!(parse_time("24:00").is_err());
/// assert!(parse_time("6:30").is_err());
/// ```
pub fn parse_time(s: &str) -> EngineResult<ClockTime> {
    let invalid = || EngineError::InvalidTimeFormat {
        value: s.to_string(),
    };

    let (hours, minutes) = s.split_once(':').ok_or_else(invalid)?;
    if hours.len() != 2
        || minutes.len() != 2
        || !hours.bytes().all(|b| b.is_ascii_digit())
        || !minutes.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let hour: u32 = hours.parse().map_err(|_| invalid())?;
    let minute: u32 = minutes.parse().map_err(|_| invalid())?;
    ClockTime::new(hour, minute).ok_or_else(invalid)
}

/// Returns the worked interval on the extended timeline.
///
/// The start is minutes since midnight; the end is shifted by a day when it
/// falls before the start.
pub fn extended_interval(start: ClockTime, end: ClockTime) -> (u32, u32) {
    let start_minutes = start.minutes();
    let mut end_minutes = end.minutes();
    if end_minutes < start_minutes {
        end_minutes += MINUTES_PER_DAY;
    }
    (start_minutes, end_minutes)
}

/// Elapsed minutes from `start` to `end`, wrapping past midnight.
///
/// Equal times give zero; the validator is what rejects such shifts.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::models::{elapsed_minutes, parse_time};
///
/// let start = parse_time("23:00").unwrap();
/// let end = parse_time("01:00").unwrap();
/// assert_eq!(elapsed_minutes(start, end), 120);
/// ```
pub fn elapsed_minutes(start: ClockTime, end: ClockTime) -> u32 {
    let (start_minutes, end_minutes) = extended_interval(start, end);
    end_minutes - start_minutes
}

/// Formats a minute count as `"7h 35m"`.
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}
