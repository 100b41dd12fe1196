//! The full shift calculation pipeline.
//!
//! [`ShiftCalculator`] ties validation, working time and pay together and
//! stamps the result as a [`ShiftEntry`]. Rates come from a [`RateSource`]
//! that is asked for the current rates on every calculation, so a caller
//! can change them between shifts without rebuilding the calculator.

use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::{ConfigLoader, RateConfig, ShiftCatalog};
use crate::error::{EngineError, EngineResult};
use crate::models::{BreakDetails, ClockTime, ShiftEntry, ShiftRequest, parse_time};

use super::break_resolver::break_details;
use super::pay_engine::compute_pay;
use super::validator::{ValidationResult, validate_shift};
use super::working_time::compute_working_time;

/// Supplies the pay rates in effect for the next calculation.
pub trait RateSource {
    /// Returns the rates to use right now.
    fn current_rates(&self) -> RateConfig;
}

impl RateSource for RateConfig {
    fn current_rates(&self) -> RateConfig {
        self.clone()
    }
}

impl RateSource for ConfigLoader {
    fn current_rates(&self) -> RateConfig {
        self.rates().clone()
    }
}

impl<F> RateSource for F
where
    F: Fn() -> RateConfig,
{
    fn current_rates(&self) -> RateConfig {
        self()
    }
}

/// Validates and calculates shifts against one catalog.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use shiftpay_engine::calculation::ShiftCalculator;
/// use shiftpay_engine::config::{RateConfig, ShiftCatalog};
/// use shiftpay_engine::models::ShiftRequest;
///
/// let catalog = ShiftCatalog::builtin();
/// let calculator = ShiftCalculator::new(&catalog, RateConfig::default());
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let entry = calculator
///     .calculate(&ShiftRequest::new("C342", "16:45", "04:25", date))
///     .unwrap();
/// assert_eq!(entry.working_time.net_minutes, 600);
/// assert!(entry.pay.has_night_hours);
/// ```
#[derive(Debug, Clone)]
pub struct ShiftCalculator<'a, R> {
    catalog: &'a ShiftCatalog,
    rates: R,
}

impl<'a, R: RateSource> ShiftCalculator<'a, R> {
    /// Creates a calculator over `catalog` reading rates from `rates`.
    pub fn new(catalog: &'a ShiftCatalog, rates: R) -> Self {
        Self { catalog, rates }
    }

    /// The catalog shifts are looked up in.
    pub fn catalog(&self) -> &ShiftCatalog {
        self.catalog
    }

    /// Validates a request without calculating it.
    pub fn validate(&self, request: &ShiftRequest) -> ValidationResult {
        validate_shift(
            self.catalog,
            &request.shift_type,
            &request.start_time,
            &request.end_time,
        )
    }

    /// Itemised break credit for already-parsed times.
    pub fn break_details(
        &self,
        shift_type: &str,
        start: ClockTime,
        end: ClockTime,
    ) -> BreakDetails {
        break_details(self.catalog, shift_type, start, end)
    }

    /// Validates and calculates one shift.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ValidationFailed`] listing every validation
    /// error when the request is not payable, and
    /// [`EngineError::InvalidConfig`] when the current rates fail
    /// [`RateConfig::validate`].
    pub fn calculate(&self, request: &ShiftRequest) -> EngineResult<ShiftEntry> {
        let started = Instant::now();

        let validation = self.validate(request);
        if !validation.is_valid {
            warn!(
                shift_type = %request.shift_type,
                start = %request.start_time,
                end = %request.end_time,
                errors = ?validation.messages(),
                "Shift rejected"
            );
            return Err(EngineError::ValidationFailed {
                errors: validation.errors,
            });
        }
        for warning in &validation.warnings {
            warn!(
                shift_type = %request.shift_type,
                warning = %warning,
                "Shift accepted with warning"
            );
        }

        let shift_type = request.shift_type.trim();
        let start = parse_time(request.start_time.trim())?;
        let end = parse_time(request.end_time.trim())?;

        let rates = self.rates.current_rates();
        if let Err(error) = rates.validate() {
            warn!(shift_type, error = %error, "Shift rejected: unusable rates");
            return Err(error);
        }
        let working_time = compute_working_time(self.catalog, shift_type, start, end);
        let pay = compute_pay(working_time.net_hours, start, end, &rates);

        let id = Uuid::new_v4();
        info!(
            entry_id = %id,
            shift_type,
            work_date = %request.work_date,
            net_minutes = working_time.net_minutes,
            total_pay = %pay.total_pay,
            duration_us = started.elapsed().as_micros(),
            "Shift calculated"
        );

        Ok(ShiftEntry {
            id,
            shift_type: shift_type.to_string(),
            start_time: start,
            end_time: end,
            work_date: request.work_date,
            working_time,
            pay,
            timestamp: Utc::now(),
        })
    }
}
