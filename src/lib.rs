//! Shift pay engine for fixed break schedules
//!
//! This crate calculates working time and pay for day and night shifts
//! against a catalog of scheduled breaks: break credit for the hours
//! actually worked, night-window overlap, and the regular / overtime /
//! night pay split.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
