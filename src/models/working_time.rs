//! Working-time and break-credit result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::shift::BreakWindow;

/// Elapsed, break and net time for one calculated shift.
///
/// # Example
///
/// ```
/// use shiftpay_engine::models::WorkingTime;
/// use rust_decimal::Decimal;
///
/// let working = WorkingTime::new(660, 100);
/// assert_eq!(working.net_minutes, 560);
/// assert_eq!(working.net_hours, Decimal::from(560) / Decimal::from(60));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingTime {
    /// Raw elapsed minutes from start to end.
    pub total_minutes: u32,
    /// Break minutes actually credited for the worked interval.
    pub break_minutes: u32,
    /// `total_minutes - break_minutes`, floored at zero.
    pub net_minutes: u32,
    /// `net_minutes / 60`.
    pub net_hours: Decimal,
}

impl WorkingTime {
    /// Derives net time from elapsed and credited break minutes.
    pub fn new(total_minutes: u32, break_minutes: u32) -> Self {
        let net_minutes = total_minutes.saturating_sub(break_minutes);
        Self {
            total_minutes,
            break_minutes,
            net_minutes,
            net_hours: Decimal::from(net_minutes) / Decimal::from(60),
        }
    }
}

/// A break that fell (at least partly) inside the worked interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakenBreak {
    /// The scheduled window.
    pub window: BreakWindow,
    /// Minutes credited; less than `window.minutes` when `partial`.
    pub credited_minutes: u32,
    /// True when the shift ended during this break.
    pub partial: bool,
}

/// Itemised break credit for a shift.
///
/// `total_minutes` is always the sum of `taken[].credited_minutes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakDetails {
    /// Breaks credited in full or in part.
    pub taken: Vec<TakenBreak>,
    /// Breaks that fell outside the worked interval.
    pub skipped: Vec<BreakWindow>,
    /// Total credited break minutes.
    pub total_minutes: u32,
}
