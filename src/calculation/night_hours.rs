//! Night-premium window overlap.
//!
//! This module computes how many hours of a shift fall inside the night
//! window (22:00 to 06:00 the next morning by default). The worked interval
//! and the window are laid on the same extended timeline and intersected,
//! so shifts that start before midnight, cross it, or start after it are all
//! handled by the same arithmetic.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::NightWindow;
use crate::models::{ClockTime, MINUTES_PER_DAY, NightHoursResult, extended_interval};

/// Length of the overlap between two half-open minute intervals.
fn overlap(a: (u32, u32), b: (u32, u32)) -> u32 {
    a.1.min(b.1).saturating_sub(a.0.max(b.0))
}

/// The night window laid out on a two-day extended timeline.
///
/// A window that wraps midnight becomes three disjoint segments: the early
/// morning of the start day, the evening of the start day, and the early
/// morning of the following day. A window that does not wrap occurs once
/// on each day.
fn night_segments(window: NightWindow) -> Vec<(u32, u32)> {
    let (start, end) = (window.start_minutes(), window.end_minutes());
    if start > end {
        vec![
            (0, end),
            (start, MINUTES_PER_DAY),
            (MINUTES_PER_DAY, MINUTES_PER_DAY + end),
        ]
    } else {
        vec![(start, end), (MINUTES_PER_DAY + start, MINUTES_PER_DAY + end)]
    }
}

/// Minutes of `[start, end)` inside the night window.
pub fn night_minutes(start: ClockTime, end: ClockTime, window: NightWindow) -> u32 {
    let worked = extended_interval(start, end);

    night_segments(window)
        .into_iter()
        .map(|segment| overlap(worked, segment))
        .sum()
}

/// Computes the night hours of a shift, rounded to two decimal places.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::compute_night_hours;
/// use shiftpay_engine::config::NightWindow;
/// use rust_decimal::Decimal;
///
/// let result = compute_night_hours(
///     "21:00".parse().unwrap(),
///     "23:00".parse().unwrap(),
///     NightWindow::default(),
/// );
/// assert_eq!(result.night_hours, Decimal::ONE);
/// assert!(result.has_night_hours);
/// ```
pub fn compute_night_hours(
    start: ClockTime,
    end: ClockTime,
    window: NightWindow,
) -> NightHoursResult {
    let minutes = night_minutes(start, end, window);
    if minutes == 0 {
        return NightHoursResult::NONE;
    }
    let night_hours = (Decimal::from(minutes) / Decimal::from(60)).round_dp(2);

    debug!(
        start = %start,
        end = %end,
        night_minutes = minutes,
        night_hours = %night_hours,
        "Computed night overlap"
    );

    NightHoursResult {
        night_hours,
        has_night_hours: night_hours > Decimal::ZERO,
    }
}
