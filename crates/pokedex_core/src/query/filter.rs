//! Record filter predicate.
//!
//! # Responsibility
//! - Own the filter snapshot edited by search box, type checkboxes and sliders.
//! - Decide per-record inclusion and apply it over a record set.
//!
//! # Invariants
//! - Every `ValueRange` keeps `lo <= hi`.
//! - Filtering is stable: output is a subsequence of input in input order.
//! - Absent vitality/power compare as `0`.

use crate::model::record::CanonicalRecord;
use crate::query::bounds::Bounds;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Closed integer interval `[lo, hi]`, serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i64; 2]", into = "[i64; 2]")]
pub struct ValueRange {
    lo: i64,
    hi: i64,
}

impl ValueRange {
    /// Conceptually `[0, +inf)`.
    pub const FULL: Self = Self { lo: 0, hi: i64::MAX };

    /// Builds a range, swapping reversed endpoints.
    pub fn new(lo: i64, hi: i64) -> Self {
        if lo <= hi {
            Self { lo, hi }
        } else {
            Self { lo: hi, hi: lo }
        }
    }

    pub fn lo(&self) -> i64 {
        self.lo
    }

    pub fn hi(&self) -> i64 {
        self.hi
    }

    pub fn contains(&self, value: i64) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Moves the lower handle, never past the upper one.
    pub fn with_lo(self, lo: i64) -> Self {
        Self {
            lo: lo.min(self.hi),
            hi: self.hi,
        }
    }

    /// Moves the upper handle, never below the lower one.
    pub fn with_hi(self, hi: i64) -> Self {
        Self {
            lo: self.lo,
            hi: hi.max(self.lo),
        }
    }

    /// Smallest range covering both `self` and `value`.
    pub(crate) fn widen(self, value: i64) -> Self {
        Self {
            lo: self.lo.min(value),
            hi: self.hi.max(value),
        }
    }
}

impl From<[i64; 2]> for ValueRange {
    fn from([lo, hi]: [i64; 2]) -> Self {
        Self::new(lo, hi)
    }
}

impl From<ValueRange> for [i64; 2] {
    fn from(range: ValueRange) -> Self {
        [range.lo, range.hi]
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Immutable filter snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Case-insensitive substring matched against `display_name`.
    pub query: String,
    /// Empty means no category restriction.
    pub selected_categories: BTreeSet<String>,
    pub vitality_range: ValueRange,
    pub mass_range: ValueRange,
    pub power_range: ValueRange,
}

impl FilterState {
    /// Full-open filter: empty query, no categories, `[0, +inf)` ranges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter whose ranges span the dataset bounds exactly.
    pub fn from_bounds(bounds: &Bounds) -> Self {
        Self::new().seeded_from(bounds)
    }

    /// Replaces all three ranges with the dataset span, keeping query and
    /// categories.
    pub fn seeded_from(self, bounds: &Bounds) -> Self {
        Self {
            vitality_range: bounds.vitality,
            mass_range: bounds.mass,
            power_range: bounds.power,
            ..self
        }
    }

    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self
        }
    }

    /// Checks or unchecks one category.
    pub fn toggle_category(mut self, category: &str) -> Self {
        if !self.selected_categories.remove(category) {
            self.selected_categories.insert(category.to_string());
        }
        self
    }

    pub fn with_vitality_range(self, range: ValueRange) -> Self {
        Self {
            vitality_range: range,
            ..self
        }
    }

    pub fn with_mass_range(self, range: ValueRange) -> Self {
        Self {
            mass_range: range,
            ..self
        }
    }

    pub fn with_power_range(self, range: ValueRange) -> Self {
        Self {
            power_range: range,
            ..self
        }
    }
}

/// Decides whether one record passes every active criterion.
///
/// Criteria are evaluated as a short-circuit conjunction: name query,
/// categories, then the vitality, mass and power ranges.
pub fn matches(record: &CanonicalRecord, filter: &FilterState) -> bool {
    Needle::new(&filter.query).matches(record, filter)
}

/// Applies [`matches`] over `records`, preserving relative order.
pub fn apply_filter<'a>(
    records: &'a [CanonicalRecord],
    filter: &FilterState,
) -> Vec<&'a CanonicalRecord> {
    let needle = Needle::new(&filter.query);
    records
        .iter()
        .filter(|record| needle.matches(record, filter))
        .collect()
}

/// Query lowered once per filter pass.
struct Needle(Option<String>);

impl Needle {
    fn new(query: &str) -> Self {
        if query.is_empty() {
            Self(None)
        } else {
            Self(Some(query.to_lowercase()))
        }
    }

    fn matches(&self, record: &CanonicalRecord, filter: &FilterState) -> bool {
        if let Some(needle) = &self.0 {
            if !record.display_name.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }

        if !filter.selected_categories.is_empty()
            && !record
                .categories
                .iter()
                .any(|category| filter.selected_categories.contains(category))
        {
            return false;
        }

        filter.vitality_range.contains(record.vitality_or_zero())
            && filter.mass_range.contains(record.mass_units)
            && filter.power_range.contains(record.power_or_zero())
    }
}
