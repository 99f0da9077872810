//! Dataset bounds for range sliders.
//!
//! # Responsibility
//! - Derive per-field `[min, max]` across an unfiltered record set.
//!
//! # Invariants
//! - Empty input has no bounds (`None`).
//! - Absent vitality/power count as `0`, matching the filter predicate.

use crate::model::record::CanonicalRecord;
use crate::query::filter::ValueRange;
use serde::{Deserialize, Serialize};

/// Slider spans for the three numeric filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub vitality: ValueRange,
    pub mass: ValueRange,
    pub power: ValueRange,
}

/// Computes bounds over `records`.
///
/// Callers should pass the dataset backing the current page or search, not
/// the filtered view, otherwise the sliders' own span drifts while the user
/// moves them.
pub fn compute_bounds(records: &[CanonicalRecord]) -> Option<Bounds> {
    let (first, rest) = records.split_first()?;
    let seed = Bounds {
        vitality: ValueRange::new(first.vitality_or_zero(), first.vitality_or_zero()),
        mass: ValueRange::new(first.mass_units, first.mass_units),
        power: ValueRange::new(first.power_or_zero(), first.power_or_zero()),
    };

    Some(rest.iter().fold(seed, |acc, record| Bounds {
        vitality: acc.vitality.widen(record.vitality_or_zero()),
        mass: acc.mass.widen(record.mass_units),
        power: acc.power.widen(record.power_or_zero()),
    }))
}
