//! Configuration types for the shift pay engine.
//!
//! This module contains the strongly-typed settings structures that are
//! deserialized from `settings.yaml`. Every section falls back to the
//! canonical defaults when it is missing, so a partial file only overrides
//! what it names.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{MINUTES_PER_DAY, ShiftDefinition};

/// Highest hourly rate accepted by [`RateConfig::validate`].
pub const MAX_HOURLY_RATE: u32 = 100_000_000;

/// Pay rates and thresholds read by every pay calculation.
///
/// The engine never caches this value; callers pass the current rates into
/// each calculation.
///
/// # Example
///
/// ```
/// use shiftpay_engine::config::RateConfig;
/// use rust_decimal::Decimal;
///
/// let rates = RateConfig::default();
/// assert_eq!(rates.base_rate, Decimal::from(2100));
/// assert_eq!(rates.regular_minutes_limit, 455); // 7h 35m
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateConfig {
    /// Currency per regular hour.
    pub base_rate: Decimal,
    /// Currency per overtime or night hour.
    pub overtime_rate: Decimal,
    /// Net minutes per shift paid at the base rate before overtime applies.
    pub regular_minutes_limit: u32,
    /// Hour of day the night window opens.
    pub night_start_hour: u32,
    /// Hour of the following morning the night window closes.
    pub night_end_hour: u32,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            base_rate: Decimal::from(2100),
            overtime_rate: Decimal::from(2625),
            regular_minutes_limit: 7 * 60 + 35,
            night_start_hour: 22,
            night_end_hour: 6,
        }
    }
}

impl RateConfig {
    /// The regular-hours threshold in decimal hours.
    pub fn regular_hours_limit(&self) -> Decimal {
        Decimal::from(self.regular_minutes_limit) / Decimal::from(60)
    }

    /// The night-premium window described by these rates.
    pub fn night_window(&self) -> NightWindow {
        NightWindow {
            start_hour: self.night_start_hour,
            end_hour: self.night_end_hour,
        }
    }

    /// Checks that the rates can be used for a calculation.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: &str| {
            Err(EngineError::InvalidConfig {
                message: message.to_string(),
            })
        };

        if self.base_rate <= Decimal::ZERO {
            return invalid("base_rate must be positive");
        }
        if self.overtime_rate <= Decimal::ZERO {
            return invalid("overtime_rate must be positive");
        }
        if self.base_rate.max(self.overtime_rate) > Decimal::from(MAX_HOURLY_RATE) {
            return invalid("rates must not exceed 100000000 per hour");
        }
        if self.regular_minutes_limit == 0 || self.regular_minutes_limit > MINUTES_PER_DAY {
            return invalid("regular_minutes_limit must be between 1 and 1440");
        }
        if !(12..=23).contains(&self.night_start_hour) {
            return invalid("night_start_hour must be between 12 and 23");
        }
        if self.night_end_hour > 12 {
            return invalid("night_end_hour must be between 0 and 12");
        }
        Ok(())
    }
}

/// The night-premium window, usually from `start_hour` one evening to
/// `end_hour` the next morning.
///
/// A window whose start is not after its end covers `start_hour` to
/// `end_hour` within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightWindow {
    /// Evening hour the window opens.
    pub start_hour: u32,
    /// Morning hour the window closes.
    pub end_hour: u32,
}

impl NightWindow {
    /// Minute of the day the window opens.
    pub fn start_minutes(&self) -> u32 {
        self.start_hour * 60
    }

    /// Minute of the morning the window closes.
    pub fn end_minutes(&self) -> u32 {
        self.end_hour * 60
    }
}

impl Default for NightWindow {
    fn default() -> Self {
        RateConfig::default().night_window()
    }
}

/// Weekly earnings and hours targets used by period summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalSettings {
    /// Target net hours per week.
    pub weekly_goal_hours: Decimal,
    /// Target total pay per week.
    pub weekly_goal_pay: Decimal,
}

impl Default for GoalSettings {
    fn default() -> Self {
        Self {
            weekly_goal_hours: Decimal::from(40),
            weekly_goal_pay: Decimal::from(100_000),
        }
    }
}

/// Fixed monthly deductions and the variable income-tax rate used for
/// take-home estimates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeductionConfig {
    /// Monthly employment insurance premium.
    pub employment_insurance: Decimal,
    /// Monthly health insurance premium.
    pub health_insurance: Decimal,
    /// Monthly pension contribution.
    pub pension: Decimal,
    /// Monthly dormitory or housing fee.
    pub dormitory_fee: Decimal,
    /// Income tax as a fraction of gross (0.037 = 3.7%).
    pub income_tax_rate: Decimal,
}

impl Default for DeductionConfig {
    fn default() -> Self {
        Self {
            employment_insurance: Decimal::from(2474),
            health_insurance: Decimal::from(14_960),
            pension: Decimal::from(31_110),
            dormitory_fee: Decimal::from(34_000),
            income_tax_rate: Decimal::new(37, 3),
        }
    }
}

impl DeductionConfig {
    /// Sum of the fixed monthly deductions.
    pub fn fixed_monthly_total(&self) -> Decimal {
        self.employment_insurance + self.health_insurance + self.pension + self.dormitory_fee
    }

    /// Checks that no deduction is negative and the tax rate is a fraction.
    pub fn validate(&self) -> EngineResult<()> {
        let fixed = [
            self.employment_insurance,
            self.health_insurance,
            self.pension,
            self.dormitory_fee,
        ];
        if fixed.iter().any(|amount| *amount < Decimal::ZERO) {
            return Err(EngineError::InvalidConfig {
                message: "deductions must not be negative".to_string(),
            });
        }
        if self.income_tax_rate < Decimal::ZERO || self.income_tax_rate >= Decimal::ONE {
            return Err(EngineError::InvalidConfig {
                message: "income_tax_rate must be in [0, 1)".to_string(),
            });
        }
        Ok(())
    }
}

/// Everything in `settings.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pay rates and thresholds.
    pub rates: RateConfig,
    /// Weekly targets.
    pub goals: GoalSettings,
    /// Take-home deductions.
    pub deductions: DeductionConfig,
}

impl Settings {
    /// Validates every section.
    pub fn validate(&self) -> EngineResult<()> {
        self.rates.validate()?;
        self.deductions.validate()
    }
}

/// Shape of `shifts.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CatalogFile {
    /// Shift definitions in display order.
    pub shifts: Vec<ShiftDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_rates_are_canonical() {
        let rates = RateConfig::default();
        assert_eq!(rates.base_rate, dec("2100"));
        assert_eq!(rates.overtime_rate, dec("2625"));
        assert_eq!(rates.night_start_hour, 22);
        assert_eq!(rates.night_end_hour, 6);
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_regular_hours_limit_is_7h35m() {
        let limit = RateConfig::default().regular_hours_limit();
        assert_eq!(limit.round_dp(4), dec("7.5833"));
    }

    #[test]
    fn test_night_window_minutes() {
        let window = RateConfig::default().night_window();
        assert_eq!(window.start_minutes(), 1320);
        assert_eq!(window.end_minutes(), 360);
    }

    #[test]
    fn test_rate_validation_rejects_non_positive_rate() {
        let rates = RateConfig {
            base_rate: Decimal::ZERO,
            ..RateConfig::default()
        };
        assert!(matches!(
            rates.validate(),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_rate_validation_rejects_bad_night_window() {
        let rates = RateConfig {
            night_start_hour: 6,
            ..RateConfig::default()
        };
        assert!(rates.validate().is_err());

        let rates = RateConfig {
            night_end_hour: 18,
            ..RateConfig::default()
        };
        assert!(rates.validate().is_err());
    }

    #[test]
    fn test_rate_validation_rejects_unbounded_rates() {
        let rates = RateConfig {
            base_rate: Decimal::MAX,
            ..RateConfig::default()
        };
        assert!(matches!(
            rates.validate(),
            Err(EngineError::InvalidConfig { .. })
        ));

        let rates = RateConfig {
            overtime_rate: Decimal::from(MAX_HOURLY_RATE) + dec("0.01"),
            ..RateConfig::default()
        };
        assert!(rates.validate().is_err());

        let rates = RateConfig {
            base_rate: Decimal::from(MAX_HOURLY_RATE),
            overtime_rate: Decimal::from(MAX_HOURLY_RATE),
            ..RateConfig::default()
        };
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_partial_settings_fall_back_to_defaults() {
        let yaml = "rates:\n  base_rate: 2200\n";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.rates.base_rate, dec("2200"));
        assert_eq!(settings.rates.overtime_rate, dec("2625"));
        assert_eq!(settings.goals, GoalSettings::default());
        assert_eq!(settings.deductions, DeductionConfig::default());
    }

    #[test]
    fn test_fixed_monthly_total() {
        assert_eq!(DeductionConfig::default().fixed_monthly_total(), dec("82544"));
    }

    #[test]
    fn test_deduction_validation_rejects_full_tax_rate() {
        let deductions = DeductionConfig {
            income_tax_rate: Decimal::ONE,
            ..DeductionConfig::default()
        };
        assert!(deductions.validate().is_err());
    }
}
