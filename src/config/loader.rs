//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the shift
//! catalog and settings from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::catalog::ShiftCatalog;
use super::types::{CatalogFile, DeductionConfig, GoalSettings, RateConfig, Settings};

/// Loads and provides access to the shift catalog and settings.
///
/// # Directory Structure
///
/// ```text
/// config/shiftpay/
/// ├── shifts.yaml    # Shift definitions and break schedules
/// └── settings.yaml  # Rates, weekly goals and deductions
/// ```
///
/// # Example
///
/// ```no_run
/// use shiftpay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/shiftpay").unwrap();
/// let day = loader.catalog().require("C341").unwrap();
/// println!("{} has {} break minutes", day.name, day.total_break_minutes());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: ShiftCatalog,
    settings: Settings,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing
    /// - Either file contains invalid YAML
    /// - A shift definition or setting breaks its invariants
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let catalog_file = Self::load_yaml::<CatalogFile>(&path.join("shifts.yaml"))?;
        let catalog = ShiftCatalog::new(catalog_file.shifts)?;

        let settings = Self::load_yaml::<Settings>(&path.join("settings.yaml"))?;
        settings.validate()?;

        info!(
            path = %path.display(),
            shifts = catalog.len(),
            base_rate = %settings.rates.base_rate,
            overtime_rate = %settings.rates.overtime_rate,
            "Loaded shift pay configuration"
        );

        Ok(Self { catalog, settings })
    }

    /// The canonical catalog and default settings, without touching disk.
    pub fn builtin() -> Self {
        Self {
            catalog: ShiftCatalog::builtin(),
            settings: Settings::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the shift catalog.
    pub fn catalog(&self) -> &ShiftCatalog {
        &self.catalog
    }

    /// Returns all settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the pay rates.
    pub fn rates(&self) -> &RateConfig {
        &self.settings.rates
    }

    /// Returns the weekly goals.
    pub fn goals(&self) -> &GoalSettings {
        &self.settings.goals
    }

    /// Returns the take-home deductions.
    pub fn deductions(&self) -> &DeductionConfig {
        &self.settings.deductions
    }
}
