//! Calculation logic for the shift pay engine.
//!
//! This module contains break credit resolution, working time, night-window
//! overlap, the regular / overtime / night pay split, input validation, the
//! calculation pipeline that ties them together, period summaries and
//! take-home estimates.

mod break_resolver;
mod calculator;
mod night_hours;
mod pay_engine;
mod summary;
mod take_home;
mod validator;
mod working_time;

pub use break_resolver::{actual_break_minutes, break_details, resolve_breaks};
pub use calculator::{RateSource, ShiftCalculator};
pub use night_hours::{compute_night_hours, night_minutes};
pub use pay_engine::{HoursSplit, PAY_DECIMAL_PLACES, compute_pay, split_at_limit};
pub use summary::{
    PeriodSummary, WEEKS_PER_MONTH, entries_in_month, monthly_summary, recent_entries, summarize,
    weekly_totals_for_month,
};
pub use take_home::{IncomePeriod, TakeHomeEstimate, YearlyDeductions, estimate_take_home};
pub use validator::{
    MAX_SHIFT_MINUTES, MIN_SHIFT_MINUTES, NOMINAL_OVERRUN_WARNING_MINUTES, TimeField,
    ValidationError, ValidationResult, ValidationWarning, validate_shift,
};
pub use working_time::compute_working_time;
