//! Aggregates over calculated shift entries.
//!
//! These functions only read [`ShiftEntry`] values; they never recalculate
//! pay. Weeks of a month are fixed seven-day buckets counted from the 1st
//! (days 1-7, 8-14, 15-21, 22-28, 29-31).

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::GoalSettings;
use crate::models::ShiftEntry;

/// Number of week-of-month buckets.
pub const WEEKS_PER_MONTH: usize = 5;

/// Totals and goal progress for a set of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Number of entries.
    pub total_shifts: usize,
    /// Sum of net hours.
    pub total_hours: Decimal,
    /// Sum of total pay.
    pub total_earnings: Decimal,
    /// Earnings per shift; zero when there are no shifts.
    pub average_daily: Decimal,
    /// Earnings against the pay goal, percent, capped at 100.
    pub goal_progress_percent: Decimal,
    /// Hours against the hours goal, percent, capped at 100.
    pub hours_goal_progress_percent: Decimal,
}

fn progress_percent(actual: Decimal, goal: Decimal) -> Decimal {
    if goal <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (actual / goal * Decimal::ONE_HUNDRED)
        .min(Decimal::ONE_HUNDRED)
        .round_dp(2)
}

/// Summarises `entries` against `goals`.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::summarize;
/// use shiftpay_engine::config::GoalSettings;
/// use shiftpay_engine::models::ShiftEntry;
/// use rust_decimal::Decimal;
///
/// let entries: Vec<ShiftEntry> = Vec::new();
/// let summary = summarize(&entries, &GoalSettings::default());
/// assert_eq!(summary.total_shifts, 0);
/// assert_eq!(summary.average_daily, Decimal::ZERO);
/// ```
pub fn summarize<'a, I>(entries: I, goals: &GoalSettings) -> PeriodSummary
where
    I: IntoIterator<Item = &'a ShiftEntry>,
{
    let mut total_shifts = 0usize;
    let mut total_hours = Decimal::ZERO;
    let mut total_earnings = Decimal::ZERO;

    for entry in entries {
        total_shifts += 1;
        total_hours += entry.working_time.net_hours;
        total_earnings += entry.pay.total_pay;
    }

    let average_daily = if total_shifts > 0 {
        total_earnings / Decimal::from(total_shifts)
    } else {
        Decimal::ZERO
    };

    PeriodSummary {
        total_shifts,
        total_hours,
        total_earnings,
        average_daily,
        goal_progress_percent: progress_percent(total_earnings, goals.weekly_goal_pay),
        hours_goal_progress_percent: progress_percent(total_hours, goals.weekly_goal_hours),
    }
}

/// Entries whose work date falls in `year`-`month`, in input order.
pub fn entries_in_month(entries: &[ShiftEntry], year: i32, month: u32) -> Vec<&ShiftEntry> {
    entries
        .iter()
        .filter(|entry| entry.work_date.year() == year && entry.work_date.month() == month)
        .collect()
}

/// [`summarize`] restricted to one calendar month.
pub fn monthly_summary(
    entries: &[ShiftEntry],
    year: i32,
    month: u32,
    goals: &GoalSettings,
) -> PeriodSummary {
    summarize(entries_in_month(entries, year, month), goals)
}

/// Total pay per week-of-month bucket for one calendar month.
pub fn weekly_totals_for_month(
    entries: &[ShiftEntry],
    year: i32,
    month: u32,
) -> [Decimal; WEEKS_PER_MONTH] {
    let mut totals = [Decimal::ZERO; WEEKS_PER_MONTH];
    for entry in entries_in_month(entries, year, month) {
        let week = ((entry.work_date.day() - 1) / 7) as usize;
        if let Some(total) = totals.get_mut(week) {
            *total += entry.pay.total_pay;
        }
    }
    totals
}

/// The last `n` entries, newest first.
///
/// Entries are assumed to be in the order they were recorded.
pub fn recent_entries(entries: &[ShiftEntry], n: usize) -> Vec<&ShiftEntry> {
    entries.iter().rev().take(n).collect()
}
