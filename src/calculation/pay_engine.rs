//! Pay calculation: the regular / overtime / night split.
//!
//! Night hours are carved out of net hours first and always paid at the
//! overtime rate, whether or not they would have fallen under the regular
//! limit. What remains is split at the regular-hours limit into base-rate
//! and overtime-rate hours.
//!
//! Each pay component is rounded to [`PAY_DECIMAL_PLACES`] before the total
//! is summed, so the total is exact and agrees with its components.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RateConfig;
use crate::models::{ClockTime, PayBreakdown};

use super::night_hours::compute_night_hours;

/// Decimal places kept on every pay amount.
pub const PAY_DECIMAL_PLACES: u32 = 2;

fn round_pay(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(PAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Hours split at the regular-hours limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursSplit {
    /// Hours up to the limit.
    pub regular_hours: Decimal,
    /// Hours beyond the limit.
    pub overtime_hours: Decimal,
}

/// Splits `hours` into regular hours (capped at `limit`) and overtime.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::split_at_limit;
/// use rust_decimal::Decimal;
///
/// let split = split_at_limit(Decimal::from(10), Decimal::from(8));
/// assert_eq!(split.regular_hours, Decimal::from(8));
/// assert_eq!(split.overtime_hours, Decimal::from(2));
/// ```
pub fn split_at_limit(hours: Decimal, limit: Decimal) -> HoursSplit {
    let hours = hours.max(Decimal::ZERO);
    HoursSplit {
        regular_hours: hours.min(limit),
        overtime_hours: (hours - limit).max(Decimal::ZERO),
    }
}

/// Calculates the pay split for a shift.
///
/// `net_hours` comes from [`compute_working_time`](super::compute_working_time);
/// `start` and `end` are only used to find the night overlap. Rates are
/// read from `rates` on every call.
///
/// This function performs no validation and never fails. Zero net hours
/// give an all-zero breakdown. `rates` are expected to have passed
/// [`RateConfig::validate`].
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::compute_pay;
/// use shiftpay_engine::config::RateConfig;
/// use rust_decimal::Decimal;
///
/// let pay = compute_pay(
///     Decimal::from(8),
///     "08:00".parse().unwrap(),
///     "17:00".parse().unwrap(),
///     &RateConfig::default(),
/// );
/// assert!(!pay.has_night_hours);
/// assert_eq!(pay.night_pay, Decimal::ZERO);
/// assert_eq!(pay.total_pay, pay.regular_pay + pay.overtime_pay);
/// ```
pub fn compute_pay(
    net_hours: Decimal,
    start: ClockTime,
    end: ClockTime,
    rates: &RateConfig,
) -> PayBreakdown {
    if net_hours <= Decimal::ZERO {
        return PayBreakdown::zero();
    }

    let limit = rates.regular_hours_limit();
    let night = compute_night_hours(start, end, rates.night_window());

    let (split, night_hours) = if night.has_night_hours {
        let credited_night = night.night_hours.min(net_hours);
        let remaining = net_hours - credited_night;
        (split_at_limit(remaining, limit), credited_night)
    } else {
        (split_at_limit(net_hours, limit), Decimal::ZERO)
    };

    let regular_pay = round_pay(split.regular_hours * rates.base_rate);
    let overtime_pay = round_pay(split.overtime_hours * rates.overtime_rate);
    let night_pay = round_pay(night_hours * rates.overtime_rate);
    let total_pay = regular_pay + overtime_pay + night_pay;

    debug!(
        net_hours = %net_hours,
        regular_hours = %split.regular_hours,
        overtime_hours = %split.overtime_hours,
        night_hours = %night_hours,
        total_pay = %total_pay,
        "Computed pay split"
    );

    PayBreakdown {
        regular_hours: split.regular_hours,
        overtime_hours: split.overtime_hours,
        night_hours,
        regular_pay,
        overtime_pay,
        night_pay,
        total_pay,
        has_night_hours: night.has_night_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn approx(actual: Decimal, expected: &str) {
        let diff = (actual - dec(expected)).abs();
        assert!(diff < dec("0.0001"), "expected ~{expected}, got {actual}");
    }

    fn rates() -> RateConfig {
        RateConfig::default()
    }

    // ==========================================================================
    // split_at_limit
    // ==========================================================================

    #[test]
    fn test_split_under_limit() {
        let split = split_at_limit(dec("6.0"), dec("8.0"));
        assert_eq!(split.regular_hours, dec("6.0"));
        assert_eq!(split.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_split_at_exact_limit() {
        let split = split_at_limit(dec("8.0"), dec("8.0"));
        assert_eq!(split.regular_hours, dec("8.0"));
        assert_eq!(split.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_split_fractional_limit() {
        let split = split_at_limit(dec("8.5"), dec("7.5"));
        assert_eq!(split.regular_hours, dec("7.5"));
        assert_eq!(split.overtime_hours, dec("1.0"));
    }

    // ==========================================================================
    // compute_pay without night hours
    // ==========================================================================

    #[test]
    fn test_overtime_threshold_at_7h35m() {
        let pay = compute_pay(dec("9"), t("08:00"), t("17:00"), &rates());

        approx(pay.regular_hours, "7.5833");
        approx(pay.overtime_hours, "1.4167");
        assert_eq!(pay.night_hours, Decimal::ZERO);
        assert!(!pay.has_night_hours);
    }

    #[test]
    fn test_pay_amounts_without_night() {
        let pay = compute_pay(dec("9"), t("08:00"), t("17:00"), &rates());

        // 455 min * 2100/60 = 15925; 85 min * 2625/60 = 3718.75
        assert_eq!(pay.regular_pay, dec("15925"));
        assert_eq!(pay.overtime_pay, dec("3718.75"));
        assert_eq!(pay.night_pay, Decimal::ZERO);
        assert_eq!(pay.total_pay, dec("19643.75"));
    }

    #[test]
    fn test_short_day_is_all_regular() {
        let pay = compute_pay(dec("4"), t("09:00"), t("13:00"), &rates());
        assert_eq!(pay.regular_hours, dec("4"));
        assert_eq!(pay.overtime_hours, Decimal::ZERO);
        assert_eq!(pay.regular_pay, dec("8400"));
        assert_eq!(pay.total_pay, dec("8400"));
    }

    // ==========================================================================
    // compute_pay with night hours
    // ==========================================================================

    #[test]
    fn test_night_hours_carved_out_first() {
        // 16:45-01:25 with 75 break minutes: 445 net minutes.
        let net = Decimal::from(445) / Decimal::from(60);
        let pay = compute_pay(net, t("16:45"), t("01:25"), &rates());

        assert!(pay.has_night_hours);
        assert_eq!(pay.night_hours, dec("3.42"));
        assert_eq!(pay.night_pay, dec("3.42") * dec("2625"));

        // Remaining 7.4167 - 3.42 hours is under the limit.
        approx(pay.regular_hours, "3.9967");
        assert_eq!(pay.overtime_hours, Decimal::ZERO);
        // 445 min * 35 - 3.42 h * 2100
        assert_eq!(pay.regular_pay, dec("8393"));
    }

    #[test]
    fn test_long_night_shift_also_has_overtime() {
        // 14:00-03:00, 12h net: 5h night, 7h remaining under 7h35m.
        let pay = compute_pay(dec("12"), t("14:00"), t("03:00"), &rates());
        assert_eq!(pay.night_hours, dec("5"));
        assert_eq!(pay.regular_hours, dec("7"));
        assert_eq!(pay.overtime_hours, Decimal::ZERO);

        // 15:00-07:00, 14h net: 8h night, 6h remaining.
        let pay = compute_pay(dec("14"), t("15:00"), t("07:00"), &rates());
        assert_eq!(pay.night_hours, dec("8"));
        assert_eq!(pay.regular_hours, dec("6"));

        // 13:00-04:00, 15h net: 6h night, 9h remaining -> overtime.
        let pay = compute_pay(dec("15"), t("13:00"), t("04:00"), &rates());
        assert_eq!(pay.night_hours, dec("6"));
        approx(pay.regular_hours, "7.5833");
        approx(pay.overtime_hours, "1.4167");
    }

    #[test]
    fn test_night_hours_capped_at_net_hours() {
        // Entire shift is night time but breaks shrink net below it.
        let pay = compute_pay(dec("3"), t("22:00"), t("02:00"), &rates());

        assert_eq!(pay.night_hours, dec("3"));
        assert_eq!(pay.regular_hours, Decimal::ZERO);
        assert_eq!(pay.overtime_hours, Decimal::ZERO);
        assert_eq!(pay.regular_pay, Decimal::ZERO);
        assert_eq!(pay.night_pay, dec("7875"));
        assert_eq!(pay.total_pay, dec("7875"));
    }

    #[test]
    fn test_hours_reconcile_to_net() {
        let net = dec("10.25");
        let pay = compute_pay(net, t("18:00"), t("05:00"), &rates());
        assert_eq!(pay.regular_hours + pay.overtime_hours + pay.night_hours, net);
    }

    // ==========================================================================
    // Edge cases and invariants
    // ==========================================================================

    #[test]
    fn test_pay_amounts_have_two_decimal_places() {
        // 565 net minutes, no night overlap.
        let net = Decimal::from(565) / Decimal::from(60);
        let pay = compute_pay(net, t("06:30"), t("17:30"), &rates());

        assert_eq!(pay.regular_pay.to_string(), "15925.00");
        assert_eq!(pay.overtime_pay.to_string(), "4812.50");
        assert_eq!(pay.total_pay.to_string(), "20737.50");
        assert_eq!(pay.rounded_total(), dec("20738"));
    }

    #[test]
    fn test_half_currency_total_rounds_up() {
        // 00:00-01:35: 1.58 night hours and 0.0033 regular hours.
        let net = Decimal::from(95) / Decimal::from(60);
        let pay = compute_pay(net, t("00:00"), t("01:35"), &rates());

        assert_eq!(pay.night_pay, dec("4147.5"));
        assert_eq!(pay.regular_pay, dec("7"));
        assert_eq!(pay.total_pay, dec("4154.5"));
        assert_eq!(pay.rounded_total(), dec("4155"));
    }

    #[test]
    fn test_zero_net_hours_is_all_zero() {
        let pay = compute_pay(Decimal::ZERO, t("21:00"), t("23:00"), &rates());
        assert_eq!(pay, PayBreakdown::zero());
    }

    #[test]
    fn test_total_is_sum_of_components() {
        for (net, start, end) in [
            ("9", "08:00", "17:00"),
            ("7.4166666666666666666666666667", "16:45", "01:25"),
            ("13", "15:00", "05:00"),
        ] {
            let pay = compute_pay(dec(net), t(start), t(end), &rates());
            assert_eq!(pay.total_pay, pay.regular_pay + pay.overtime_pay + pay.night_pay);
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = compute_pay(dec("8.75"), t("16:45"), t("04:25"), &rates());
        let second = compute_pay(dec("8.75"), t("16:45"), t("04:25"), &rates());
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_rates_are_read_per_call() {
        let mut custom = rates();
        let before = compute_pay(dec("4"), t("09:00"), t("13:00"), &custom);

        custom.base_rate = dec("2500");
        let after = compute_pay(dec("4"), t("09:00"), t("13:00"), &custom);

        assert_eq!(before.total_pay, dec("8400"));
        assert_eq!(after.total_pay, dec("10000"));
    }

    #[test]
    fn test_custom_regular_limit() {
        let custom = RateConfig {
            regular_minutes_limit: 8 * 60,
            ..rates()
        };
        let pay = compute_pay(dec("10"), t("07:00"), t("19:00"), &custom);
        assert_eq!(pay.regular_hours, dec("8"));
        assert_eq!(pay.overtime_hours, dec("2"));
    }
}
