//! Display projections for cards and the detail panel.
//!
//! # Responsibility
//! - Derive stat-bar scales relative to the loaded dataset.
//! - Format units, identifiers and stat labels for display.
//! - List the categories present in a dataset for the type checkboxes.

use crate::model::record::{CanonicalRecord, RecordId};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Characters kept by the card's short summary.
pub const SHORT_SUMMARY_CHARS: usize = 90;

static CAMEL_BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid camel boundary regex"));
static STAT_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-_\s]+").expect("valid separator regex"));

/// Largest value of stat `key` across `records`, at least `1`.
///
/// Records lacking the stat count as `0`.
pub fn stat_max(records: &[CanonicalRecord], key: &str) -> i64 {
    records
        .iter()
        .map(|record| record.stat(key).unwrap_or(0))
        .fold(1, i64::max)
}

/// Bar fill percentage for `value` against `max`, rounded and clamped to
/// `0..=100`.
pub fn stat_percent(value: i64, max: i64) -> u8 {
    let ratio = value as f64 / max.max(1) as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// `special-attack` and `SpecialAttack` both become `SPECIAL ATTACK`.
pub fn format_stat_name(key: &str) -> String {
    let split = CAMEL_BOUNDARY_RE.replace_all(key, "$1 $2");
    STAT_SEPARATOR_RE
        .replace_all(&split, " ")
        .trim()
        .to_uppercase()
}

/// Weight in tenth-units as kilograms, one decimal.
pub fn format_mass(mass_units: i64) -> String {
    format!("{:.1} kg", mass_units as f64 / 10.0)
}

/// Height in tenth-units as metres, two decimals.
pub fn format_size(size_units: i64) -> String {
    format!("{:.2} m", size_units as f64 / 10.0)
}

/// Zero-padded catalog number, e.g. `#007`.
pub fn format_record_number(id: RecordId) -> String {
    format!("#{id:03}")
}

/// Truncates a summary to `max_chars`, appending `…` only when cut.
pub fn short_summary(summary: Option<&str>, max_chars: usize) -> Option<String> {
    let text = summary?.trim();
    if text.is_empty() {
        return None;
    }
    if text.chars().count() <= max_chars {
        return Some(text.to_string());
    }
    let mut cut = text.chars().take(max_chars).collect::<String>();
    cut.push('…');
    Some(cut)
}

/// Unique categories present in `records`, sorted.
pub fn distinct_categories(records: &[CanonicalRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.categories.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
