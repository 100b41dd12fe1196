//! Configuration loading and management for the shift pay engine.
//!
//! This module provides the shift catalog, the rate/goal/deduction settings
//! and a loader that reads both from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use shiftpay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/shiftpay").unwrap();
//! println!("Base rate: {}", config.rates().base_rate);
//! ```

mod catalog;
mod loader;
mod types;

pub use catalog::ShiftCatalog;
pub use loader::ConfigLoader;
pub use types::{
    DeductionConfig, GoalSettings, MAX_HOURLY_RATE, NightWindow, RateConfig, Settings,
};
