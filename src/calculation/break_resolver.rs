//! Break credit resolution.
//!
//! This module decides, for each scheduled break of a shift, whether the
//! actual worked interval covered it fully, covered its start only (the
//! worker left during the break), or missed it entirely.
//!
//! A break is credited only when its start lies inside the worked interval:
//! - start and end inside: taken, full minutes credited
//! - start inside, end after the shift ended: taken with partial credit
//!   `min(shift_end - break_start, minutes)`
//! - start before the shift started or at/after it ended: skipped
//!
//! The aggregate and the itemised view share one classification, so
//! [`actual_break_minutes`] always equals [`BreakDetails::total_minutes`].

use tracing::{debug, warn};

use crate::config::ShiftCatalog;
use crate::models::{BreakDetails, ClockTime, ShiftDefinition, TakenBreak, extended_interval};

/// Classifies every break of `definition` against the worked interval.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::resolve_breaks;
/// use shiftpay_engine::config::ShiftCatalog;
///
/// let catalog = ShiftCatalog::builtin();
/// let day = catalog.require("C341").unwrap();
///
/// // Left at 14:00: the 14:35, 16:10 and 17:20 breaks never happened.
/// let details = resolve_breaks(day, "06:30".parse().unwrap(), "14:00".parse().unwrap());
/// assert_eq!(details.taken.len(), 3);
/// assert_eq!(details.skipped.len(), 3);
/// assert_eq!(details.total_minutes, 65);
/// ```
pub fn resolve_breaks(
    definition: &ShiftDefinition,
    start: ClockTime,
    end: ClockTime,
) -> BreakDetails {
    let (actual_start, actual_end) = extended_interval(start, end);
    let mut details = BreakDetails::default();

    for window in &definition.breaks {
        let (break_start, break_end) = window.position(definition.kind);

        if break_start >= actual_start && break_end <= actual_end {
            details.total_minutes += window.minutes;
            details.taken.push(TakenBreak {
                window: window.clone(),
                credited_minutes: window.minutes,
                partial: false,
            });
        } else if break_start >= actual_start && break_start < actual_end {
            let credited = (actual_end - break_start).min(window.minutes);
            details.total_minutes += credited;
            details.taken.push(TakenBreak {
                window: window.clone(),
                credited_minutes: credited,
                partial: true,
            });
        } else {
            details.skipped.push(window.clone());
        }
    }

    debug!(
        shift = %definition.id,
        start = %start,
        end = %end,
        taken = details.taken.len(),
        skipped = details.skipped.len(),
        break_minutes = details.total_minutes,
        "Resolved break credit"
    );

    details
}

/// Itemised break credit for a shift type looked up in `catalog`.
///
/// An unknown shift type yields empty details rather than an error; the
/// validator is responsible for rejecting it before pay is calculated.
pub fn break_details(
    catalog: &ShiftCatalog,
    shift_type: &str,
    start: ClockTime,
    end: ClockTime,
) -> BreakDetails {
    match catalog.get(shift_type) {
        Some(definition) => resolve_breaks(definition, start, end),
        None => {
            warn!(shift_type, "Unknown shift type, crediting no breaks");
            BreakDetails::default()
        }
    }
}

/// Total credited break minutes for a shift type looked up in `catalog`.
///
/// Zero for an unknown shift type.
pub fn actual_break_minutes(
    catalog: &ShiftCatalog,
    shift_type: &str,
    start: ClockTime,
    end: ClockTime,
) -> u32 {
    break_details(catalog, shift_type, start, end).total_minutes
}
