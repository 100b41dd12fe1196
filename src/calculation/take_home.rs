//! Take-home pay estimates.
//!
//! Fixed deductions are flat monthly amounts; income tax is a flat rate on
//! monthly gross. Yearly figures are twelve monthly ones.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DeductionConfig;
use crate::error::{EngineError, EngineResult};

const MONTHS_PER_YEAR: u32 = 12;

/// Whether a gross amount is per month or per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomePeriod {
    /// Gross per month.
    Monthly,
    /// Gross per year.
    Yearly,
}

/// Yearly deduction amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyDeductions {
    /// Employment insurance.
    pub employment_insurance: Decimal,
    /// Health insurance.
    pub health_insurance: Decimal,
    /// Pension contributions.
    pub pension: Decimal,
    /// Dormitory fee.
    pub dormitory_fee: Decimal,
    /// Sum of the fixed deductions above.
    pub fixed_total: Decimal,
    /// Income tax.
    pub income_tax: Decimal,
    /// Fixed plus variable.
    pub total: Decimal,
}

/// Result of [`estimate_take_home`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeHomeEstimate {
    /// Gross per month.
    pub monthly_gross: Decimal,
    /// Gross per year.
    pub yearly_gross: Decimal,
    /// Itemised yearly deductions.
    pub deductions: YearlyDeductions,
    /// Deductions per month.
    pub monthly_deductions: Decimal,
    /// Take-home per month.
    pub monthly_take_home: Decimal,
    /// Take-home per year.
    pub yearly_take_home: Decimal,
    /// Take-home as a percentage of gross, 2 dp.
    pub take_home_percent: Decimal,
    /// All deductions as a percentage of gross, 2 dp.
    pub deduction_percent: Decimal,
    /// Fixed deductions as a percentage of gross, 2 dp.
    pub fixed_deduction_percent: Decimal,
    /// Income tax as a percentage of gross, 2 dp.
    pub variable_deduction_percent: Decimal,
}

/// Estimates take-home pay from a gross amount.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if `gross` is not positive.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::{IncomePeriod, estimate_take_home};
/// use shiftpay_engine::config::DeductionConfig;
/// use rust_decimal::Decimal;
///
/// let estimate = estimate_take_home(
///     Decimal::from(300_000),
///     IncomePeriod::Monthly,
///     &DeductionConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(estimate.monthly_take_home, Decimal::from(206_356));
/// ```
pub fn estimate_take_home(
    gross: Decimal,
    period: IncomePeriod,
    deductions: &DeductionConfig,
) -> EngineResult<TakeHomeEstimate> {
    if gross <= Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: format!("gross income must be positive, got {gross}"),
        });
    }

    let months = Decimal::from(MONTHS_PER_YEAR);
    let (monthly_gross, yearly_gross) = match period {
        IncomePeriod::Monthly => (gross, gross * months),
        IncomePeriod::Yearly => (gross / months, gross),
    };

    let fixed_monthly = deductions.fixed_monthly_total();
    let income_tax_monthly = monthly_gross * deductions.income_tax_rate;
    let monthly_deductions = fixed_monthly + income_tax_monthly;

    let yearly = YearlyDeductions {
        employment_insurance: deductions.employment_insurance * months,
        health_insurance: deductions.health_insurance * months,
        pension: deductions.pension * months,
        dormitory_fee: deductions.dormitory_fee * months,
        fixed_total: fixed_monthly * months,
        income_tax: income_tax_monthly * months,
        total: monthly_deductions * months,
    };

    let yearly_take_home = yearly_gross - yearly.total;
    let percent_of_gross =
        |amount: Decimal| (amount / yearly_gross * Decimal::ONE_HUNDRED).round_dp(2);

    debug!(
        monthly_gross = %monthly_gross,
        monthly_deductions = %monthly_deductions,
        "Estimated take-home pay"
    );

    Ok(TakeHomeEstimate {
        monthly_gross,
        yearly_gross,
        monthly_deductions,
        monthly_take_home: monthly_gross - monthly_deductions,
        yearly_take_home,
        take_home_percent: percent_of_gross(yearly_take_home),
        deduction_percent: percent_of_gross(yearly.total),
        fixed_deduction_percent: percent_of_gross(yearly.fixed_total),
        variable_deduction_percent: percent_of_gross(yearly.income_tax),
        deductions: yearly,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn estimate(gross: &str, period: IncomePeriod) -> TakeHomeEstimate {
        estimate_take_home(dec(gross), period, &DeductionConfig::default()).unwrap()
    }

    #[test]
    fn test_monthly_gross() {
        let result = estimate("300000", IncomePeriod::Monthly);

        assert_eq!(result.yearly_gross, dec("3600000"));
        assert_eq!(result.deductions.fixed_total, dec("990528"));
        assert_eq!(result.deductions.income_tax, dec("133200"));
        assert_eq!(result.deductions.total, dec("1123728"));
        assert_eq!(result.monthly_deductions, dec("93644"));
        assert_eq!(result.monthly_take_home, dec("206356"));
        assert_eq!(result.yearly_take_home, dec("2476272"));
    }

    #[test]
    fn test_percentages() {
        let result = estimate("300000", IncomePeriod::Monthly);
        assert_eq!(result.take_home_percent, dec("68.79"));
        assert_eq!(result.deduction_percent, dec("31.21"));
        assert_eq!(result.fixed_deduction_percent, dec("27.51"));
        assert_eq!(result.variable_deduction_percent, dec("3.7"));
    }

    #[test]
    fn test_yearly_gross_matches_monthly() {
        let monthly = estimate("300000", IncomePeriod::Monthly);
        let yearly = estimate("3600000", IncomePeriod::Yearly);
        assert_eq!(yearly.monthly_gross, dec("300000"));
        assert_eq!(yearly.monthly_take_home, monthly.monthly_take_home);
        assert_eq!(yearly.deductions, monthly.deductions);
    }

    #[test]
    fn test_itemised_fixed_deductions_are_annualised() {
        let result = estimate("250000", IncomePeriod::Monthly);
        assert_eq!(result.deductions.employment_insurance, dec("29688"));
        assert_eq!(result.deductions.health_insurance, dec("179520"));
        assert_eq!(result.deductions.pension, dec("373320"));
        assert_eq!(result.deductions.dormitory_fee, dec("408000"));
    }

    #[test]
    fn test_low_income_can_go_negative() {
        let result = estimate("50000", IncomePeriod::Monthly);
        assert!(result.monthly_take_home < Decimal::ZERO);
    }

    #[test]
    fn test_rejects_non_positive_gross() {
        for gross in ["0", "-1"] {
            let result =
                estimate_take_home(dec(gross), IncomePeriod::Monthly, &DeductionConfig::default());
            assert!(matches!(result, Err(EngineError::CalculationError { .. })));
        }
    }
}
