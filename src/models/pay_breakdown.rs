//! Pay result models: night overlap and the regular/overtime/night split.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Hours of a shift that fall inside the night-premium window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightHoursResult {
    /// Night hours, rounded to two decimal places.
    pub night_hours: Decimal,
    /// `night_hours > 0`.
    pub has_night_hours: bool,
}

impl NightHoursResult {
    /// A result with no night overlap.
    pub const NONE: NightHoursResult = NightHoursResult {
        night_hours: Decimal::ZERO,
        has_night_hours: false,
    };
}

/// The three-tier pay split for one shift.
///
/// Night hours are carved out of net hours first; what remains is split at
/// the regular-hours limit. Pay components are rounded half away from zero
/// to two decimal places, and `total_pay` is always their exact sum.
///
/// # Example
///
/// ```
/// use shiftpay_engine::models::PayBreakdown;
/// use rust_decimal::Decimal;
///
/// let pay = PayBreakdown::zero();
/// assert_eq!(pay.total_pay, Decimal::ZERO);
/// assert!(!pay.has_night_hours);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Hours paid at the base rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate for exceeding the regular limit.
    pub overtime_hours: Decimal,
    /// Hours inside the night window.
    pub night_hours: Decimal,
    /// `regular_hours * base_rate`, to two decimal places.
    pub regular_pay: Decimal,
    /// `overtime_hours * overtime_rate`, to two decimal places.
    pub overtime_pay: Decimal,
    /// Credited night hours at the overtime rate, to two decimal places.
    pub night_pay: Decimal,
    /// Sum of the three pay components.
    pub total_pay: Decimal,
    /// Whether any part of the shift fell in the night window.
    pub has_night_hours: bool,
}

impl PayBreakdown {
    /// An all-zero breakdown.
    pub fn zero() -> Self {
        Self {
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            night_hours: Decimal::ZERO,
            regular_pay: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            night_pay: Decimal::ZERO,
            total_pay: Decimal::ZERO,
            has_night_hours: false,
        }
    }

    /// Total pay rounded half-up to whole currency units for display.
    pub fn rounded_total(&self) -> Decimal {
        self.total_pay
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}
