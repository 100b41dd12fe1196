//! The shift catalog: registry of named shift definitions.

use std::collections::HashSet;

use crate::error::{EngineError, EngineResult};
use crate::models::{BreakWindow, ClockTime, ShiftDefinition, ShiftKind};

/// An immutable, ordered registry of shift definitions keyed by id.
///
/// Built once at startup, either from `shifts.yaml` through
/// [`ConfigLoader`](super::ConfigLoader) or from [`ShiftCatalog::builtin`].
///
/// # Example
///
/// ```
/// use shiftpay_engine::config::ShiftCatalog;
///
/// let catalog = ShiftCatalog::builtin();
/// let night = catalog.require("C342").unwrap();
/// assert_eq!(night.name, "Night Shift");
/// assert_eq!(night.total_break_minutes(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCatalog {
    shifts: Vec<ShiftDefinition>,
}

impl ShiftCatalog {
    /// Builds a catalog, validating every definition and id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShiftDefinition`] for the first
    /// definition that breaks an invariant or repeats an id.
    pub fn new(shifts: Vec<ShiftDefinition>) -> EngineResult<Self> {
        let mut seen = HashSet::new();
        for shift in &shifts {
            shift.validate()?;
            if !seen.insert(shift.id.as_str()) {
                return Err(EngineError::InvalidShiftDefinition {
                    shift_id: shift.id.clone(),
                    message: "duplicate shift id".to_string(),
                });
            }
        }
        Ok(Self { shifts })
    }

    /// The canonical day (`C341`) and night (`C342`) shifts.
    pub fn builtin() -> Self {
        let window = |start: (u32, u32), end: (u32, u32)| {
            BreakWindow::new(
                ClockTime::from_hm(start.0, start.1),
                ClockTime::from_hm(end.0, end.1),
            )
        };

        let day = ShiftDefinition {
            id: "C341".to_string(),
            name: "Day Shift".to_string(),
            kind: ShiftKind::Day,
            default_start: ClockTime::from_hm(6, 30),
            default_end: ClockTime::from_hm(17, 30),
            breaks: vec![
                window((8, 30), (8, 40)),
                window((10, 40), (11, 25)),
                window((13, 5), (13, 15)),
                window((14, 35), (14, 45)),
                window((16, 10), (16, 20)),
                window((17, 20), (17, 35)),
            ],
        };

        let night = ShiftDefinition {
            id: "C342".to_string(),
            name: "Night Shift".to_string(),
            kind: ShiftKind::Night,
            default_start: ClockTime::from_hm(16, 45),
            default_end: ClockTime::from_hm(4, 25),
            breaks: vec![
                window((18, 45), (18, 55)),
                window((20, 55), (21, 40)),
                window((23, 10), (23, 20)),
                window((0, 50), (1, 0)),
                window((2, 25), (2, 35)),
                window((3, 35), (3, 50)),
            ],
        };

        Self {
            shifts: vec![day, night],
        }
    }

    /// Looks up a shift by id.
    pub fn get(&self, id: &str) -> Option<&ShiftDefinition> {
        self.shifts.iter().find(|shift| shift.id == id)
    }

    /// Looks up a shift by id, failing when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownShift`] for an unknown id.
    pub fn require(&self, id: &str) -> EngineResult<&ShiftDefinition> {
        self.get(id).ok_or_else(|| EngineError::UnknownShift {
            code: id.to_string(),
        })
    }

    /// Iterates shifts in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ShiftDefinition> {
        self.shifts.iter()
    }

    /// Number of shift definitions.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// True when the catalog has no shifts.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}

impl Default for ShiftCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = ShiftCatalog::builtin();
        assert_eq!(catalog.len(), 2);
        for shift in catalog.iter() {
            assert!(shift.validate().is_ok(), "{} failed validation", shift.id);
        }
    }

    #[test]
    fn test_builtin_break_totals_are_derived() {
        let catalog = ShiftCatalog::builtin();
        assert_eq!(catalog.require("C341").unwrap().total_break_minutes(), 100);
        assert_eq!(catalog.require("C342").unwrap().total_break_minutes(), 100);
    }

    #[test]
    fn test_builtin_night_default_end() {
        let night = ShiftCatalog::builtin();
        let night = night.require("C342").unwrap();
        assert_eq!(night.default_end.to_string(), "04:25");
        assert_eq!(night.kind, ShiftKind::Night);
    }

    #[test]
    fn test_unknown_shift_lookup() {
        let catalog = ShiftCatalog::builtin();
        assert!(catalog.get("C999").is_none());

        match catalog.require("C999") {
            Err(EngineError::UnknownShift { code }) => assert_eq!(code, "C999"),
            other => panic!("expected UnknownShift, got {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let day = ShiftCatalog::builtin().require("C341").unwrap().clone();
        let result = ShiftCatalog::new(vec![day.clone(), day]);

        match result {
            Err(EngineError::InvalidShiftDefinition { shift_id, message }) => {
                assert_eq!(shift_id, "C341");
                assert_eq!(message, "duplicate shift id");
            }
            other => panic!("expected InvalidShiftDefinition, got {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_invalid_definition() {
        let mut day = ShiftCatalog::builtin().require("C341").unwrap().clone();
        day.breaks[1].minutes = 40;
        assert!(ShiftCatalog::new(vec![day]).is_err());
    }

    #[test]
    fn test_iteration_preserves_order() {
        let ids: Vec<_> = ShiftCatalog::builtin().iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec!["C341", "C342"]);
    }
}
