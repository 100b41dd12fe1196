//! Shift definition model and related types.
//!
//! This module defines the [`ShiftDefinition`] and [`BreakWindow`] structs
//! describing a named work-schedule template and its fixed break schedule.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::clock_time::{ClockTime, MINUTES_PER_DAY, elapsed_minutes};

/// Break windows of a night shift that start before this minute of the day
/// belong to the morning after the shift started.
const NOON_MINUTES: u32 = 12 * 60;

/// Whether a shift runs within one day or across midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    /// A shift worked within a single calendar day.
    Day,
    /// A shift that starts in the afternoon or evening and ends after midnight.
    Night,
}

/// A scheduled break within a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakWindow {
    /// When the break starts.
    pub start: ClockTime,
    /// When the break ends.
    pub end: ClockTime,
    /// Nominal length of the break.
    pub minutes: u32,
}

impl BreakWindow {
    /// Creates a break window whose length is derived from its bounds.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self {
            start,
            end,
            minutes: elapsed_minutes(start, end),
        }
    }

    /// The span between `start` and `end`, wrapping past midnight.
    pub fn span_minutes(&self) -> u32 {
        elapsed_minutes(self.start, self.end)
    }

    /// Places the window on a shift's extended timeline.
    ///
    /// For night shifts, windows nominally starting before noon are moved to
    /// the following day so they line up with an end time past midnight.
    pub fn position(&self, kind: ShiftKind) -> (u32, u32) {
        let mut start = self.start.minutes();
        let mut end = self.end.minutes();
        if end < start {
            end += MINUTES_PER_DAY;
        }
        if kind == ShiftKind::Night && start < NOON_MINUTES {
            start += MINUTES_PER_DAY;
            end += MINUTES_PER_DAY;
        }
        (start, end)
    }
}

/// A named shift template: default times plus its ordered break schedule.
///
/// # Example
///
/// ```
/// use shiftpay_engine::models::{BreakWindow, ShiftDefinition, ShiftKind};
///
/// let shift = ShiftDefinition {
///     id: "D1".to_string(),
///     name: "Day".to_string(),
///     kind: ShiftKind::Day,
///     default_start: "09:00".parse().unwrap(),
///     default_end: "17:00".parse().unwrap(),
///     breaks: vec![BreakWindow::new("12:00".parse().unwrap(), "12:45".parse().unwrap())],
/// };
/// assert_eq!(shift.total_break_minutes(), 45);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDefinition {
    /// Unique shift code (e.g. "C341").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Day or night timeline.
    pub kind: ShiftKind,
    /// Suggested start time for data entry.
    pub default_start: ClockTime,
    /// Suggested end time for data entry.
    pub default_end: ClockTime,
    /// Scheduled breaks in chronological order.
    #[serde(default)]
    pub breaks: Vec<BreakWindow>,
}

impl ShiftDefinition {
    /// Sum of the nominal minutes of every scheduled break.
    pub fn total_break_minutes(&self) -> u32 {
        self.breaks.iter().map(|b| b.minutes).sum()
    }

    /// Length of the default schedule, from default start to default end.
    pub fn nominal_minutes(&self) -> u32 {
        elapsed_minutes(self.default_start, self.default_end)
    }

    /// Checks the break schedule invariants.
    ///
    /// Every window must be non-empty, its `minutes` must match its span,
    /// and windows must be chronological without overlapping on the
    /// shift's timeline.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: String| EngineError::InvalidShiftDefinition {
            shift_id: self.id.clone(),
            message,
        };

        if self.id.trim().is_empty() {
            return Err(invalid("shift id must not be empty".to_string()));
        }

        for window in &self.breaks {
            let span = window.span_minutes();
            if span == 0 {
                return Err(invalid(format!(
                    "break {}-{} has zero length",
                    window.start, window.end
                )));
            }
            if window.minutes != span {
                return Err(invalid(format!(
                    "break {}-{} declares {} minutes but spans {}",
                    window.start, window.end, window.minutes, span
                )));
            }
        }

        for pair in self.breaks.windows(2) {
            let (_, previous_end) = pair[0].position(self.kind);
            let (next_start, _) = pair[1].position(self.kind);
            if next_start < previous_end {
                return Err(invalid(format!(
                    "break {}-{} overlaps or precedes break {}-{}",
                    pair[1].start, pair[1].end, pair[0].start, pair[0].end
                )));
            }
        }

        Ok(())
    }
}
