//! Canonical catalog record.
//!
//! # Responsibility
//! - Define the single record shape consumed by filter, bounds and detail code.
//! - Keep display unit conversions next to the stored tenth-units.
//!
//! # Invariants
//! - `categories` is never null; an absent source array becomes empty.
//! - `vitality` / `power` stay `None` when the source omits them.
//! - `mass_units` / `size_units` default to `0` and are stored in tenths.

use serde::{Deserialize, Serialize};

/// Positive catalog identifier, unique within one result set.
pub type RecordId = u32;

/// One named stat kept for the detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    /// Source stat name, e.g. `hp` or `special-attack`.
    pub key: String,
    pub value: i64,
}

impl StatEntry {
    pub fn new(key: impl Into<String>, value: i64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Canonical catalog entry after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub id: RecordId,
    /// Never empty; `#<id>` when the source carried no usable name.
    pub display_name: String,
    /// Elemental types in received order.
    pub categories: Vec<String>,
    /// Base HP. `None` is rendered as a dash and filtered as `0`.
    pub vitality: Option<i64>,
    /// Base attack. Same absence policy as `vitality`.
    pub power: Option<i64>,
    /// Weight in hectograms.
    pub mass_units: i64,
    /// Height in decimetres.
    pub size_units: i64,
    pub image_ref: Option<String>,
    pub summary: Option<String>,
    /// Full stat list in source order, display only.
    pub extended_stats: Vec<StatEntry>,
}

impl CanonicalRecord {
    /// Creates a record with only identity fields populated.
    ///
    /// Name falls back to `#<id>` when blank.
    pub fn new(id: RecordId, display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        let display_name = if display_name.trim().is_empty() {
            fallback_name(id)
        } else {
            display_name
        };

        Self {
            id,
            display_name,
            categories: Vec::new(),
            vitality: None,
            power: None,
            mass_units: 0,
            size_units: 0,
            image_ref: None,
            summary: None,
            extended_stats: Vec::new(),
        }
    }

    /// Vitality as used by range comparisons.
    pub fn vitality_or_zero(&self) -> i64 {
        self.vitality.unwrap_or(0)
    }

    /// Power as used by range comparisons.
    pub fn power_or_zero(&self) -> i64 {
        self.power.unwrap_or(0)
    }

    /// First category, used to pick the card theme.
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    /// Weight in kilograms.
    pub fn mass_kg(&self) -> f64 {
        self.mass_units as f64 / 10.0
    }

    /// Height in metres.
    pub fn size_m(&self) -> f64 {
        self.size_units as f64 / 10.0
    }

    /// Looks up one extended stat by key.
    ///
    /// Keys compare on ASCII alphanumerics only, so `special-attack`,
    /// `SpecialAttack` and `special_attack` name the same stat.
    pub fn stat(&self, key: &str) -> Option<i64> {
        let wanted = stat_key_fingerprint(key);
        self.extended_stats
            .iter()
            .find(|entry| stat_key_fingerprint(&entry.key) == wanted)
            .map(|entry| entry.value)
    }
}

/// Name used when the source record has none.
pub fn fallback_name(id: RecordId) -> String {
    format!("#{id}")
}

/// Reduces a stat key to lowercase ASCII alphanumerics.
pub fn stat_key_fingerprint(key: &str) -> String {
    key.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
