//! Elapsed, break and net working time for a shift.

use tracing::debug;

use crate::config::ShiftCatalog;
use crate::models::{ClockTime, WorkingTime, elapsed_minutes};

use super::break_resolver::actual_break_minutes;

/// Computes the working time of a shift.
///
/// Elapsed time runs from `start` to `end`, wrapping past midnight when the
/// end is earlier than the start. Credited break minutes for `shift_type`
/// are subtracted, floored at zero. An unknown shift type credits no breaks.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::compute_working_time;
/// use shiftpay_engine::config::ShiftCatalog;
///
/// let catalog = ShiftCatalog::builtin();
/// let working = compute_working_time(
///     &catalog,
///     "C342",
///     "16:45".parse().unwrap(),
///     "01:25".parse().unwrap(),
/// );
/// assert_eq!(working.total_minutes, 520);
/// assert_eq!(working.break_minutes, 75);
/// assert_eq!(working.net_minutes, 445);
/// ```
pub fn compute_working_time(
    catalog: &ShiftCatalog,
    shift_type: &str,
    start: ClockTime,
    end: ClockTime,
) -> WorkingTime {
    let total = elapsed_minutes(start, end);
    let breaks = actual_break_minutes(catalog, shift_type, start, end);
    let working = WorkingTime::new(total, breaks);

    debug!(
        shift_type,
        total_minutes = working.total_minutes,
        break_minutes = working.break_minutes,
        net_minutes = working.net_minutes,
        "Computed working time"
    );

    working
}
