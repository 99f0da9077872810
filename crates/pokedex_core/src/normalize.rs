//! Raw record normalization.
//!
//! # Responsibility
//! - Map backend and external-API record shapes onto `CanonicalRecord`.
//! - Absorb malformed fields so one bad record never aborts a list.
//!
//! # Invariants
//! - `normalize` never fails and never panics.
//! - Missing arrays become empty, missing optional numbers become `None`.
//! - `normalize_all` yields exactly one record per input element, in order.

use crate::model::record::{fallback_name, CanonicalRecord, RecordId, StatEntry};
use log::{debug, warn};
use serde_json::{Map, Value};

const NAME_LANGUAGE_PREFERENCE: [&str; 2] = ["french", "english"];
const VITALITY_STAT: &str = "hp";
const POWER_STAT: &str = "attack";

/// Normalizes one loosely-typed record.
///
/// Accepted shapes:
/// - `name`: plain string or `{ french, english, .. }` object.
/// - `type` / `types`: array of strings or of `{ type: { name } }` objects.
/// - stats: `base` object keyed by stat name, or `stats` array of
///   `{ stat: { name }, base_stat }` entries.
pub fn normalize(raw: &Value) -> CanonicalRecord {
    let Some(fields) = raw.as_object() else {
        warn!("event=record_normalize module=normalize status=degraded reason=not_an_object");
        return CanonicalRecord::new(0, fallback_name(0));
    };

    let id = read_id(fields);
    let display_name = read_name(fields).unwrap_or_else(|| {
        debug!("event=record_normalize module=normalize status=fallback_name id={id}");
        fallback_name(id)
    });

    let mut record = CanonicalRecord::new(id, display_name);
    record.categories = read_categories(fields);
    record.extended_stats = read_stats(fields);
    record.vitality = record.stat(VITALITY_STAT);
    record.power = record.stat(POWER_STAT);
    record.mass_units = fields.get("weight").and_then(as_integer).unwrap_or(0);
    record.size_units = fields.get("height").and_then(as_integer).unwrap_or(0);
    record.image_ref = read_image(fields);
    record.summary = fields
        .get("description")
        .and_then(non_blank_str)
        .map(str::to_string);
    record
}

/// Normalizes every element independently, keeping input order.
pub fn normalize_all(raw: &[Value]) -> Vec<CanonicalRecord> {
    raw.iter().map(normalize).collect()
}

fn read_id(fields: &Map<String, Value>) -> RecordId {
    let id = fields
        .get("id")
        .and_then(as_integer)
        .and_then(|value| RecordId::try_from(value).ok())
        .unwrap_or(0);
    if id == 0 {
        warn!("event=record_normalize module=normalize status=degraded reason=invalid_id");
    }
    id
}

fn read_name(fields: &Map<String, Value>) -> Option<String> {
    match fields.get("name")? {
        Value::String(name) if !name.trim().is_empty() => Some(name.clone()),
        Value::Object(localized) => NAME_LANGUAGE_PREFERENCE
            .iter()
            .find_map(|lang| localized.get(*lang).and_then(non_blank_str))
            .map(str::to_string),
        _ => None,
    }
}

fn read_categories(fields: &Map<String, Value>) -> Vec<String> {
    let source = ["type", "types"]
        .iter()
        .find_map(|key| fields.get(*key).filter(|value| !value.is_null()));

    match source {
        Some(Value::Array(items)) => items.iter().filter_map(category_name).collect(),
        Some(Value::String(single)) if !single.trim().is_empty() => vec![single.clone()],
        _ => Vec::new(),
    }
}

fn category_name(item: &Value) -> Option<String> {
    match item {
        Value::String(name) if !name.trim().is_empty() => Some(name.clone()),
        Value::Object(slot) => slot
            .get("type")
            .and_then(|inner| inner.get("name"))
            .and_then(non_blank_str)
            .map(str::to_string),
        _ => None,
    }
}

fn read_stats(fields: &Map<String, Value>) -> Vec<StatEntry> {
    if let Some(Value::Object(base)) = fields.get("base") {
        return base
            .iter()
            .filter_map(|(key, value)| as_integer(value).map(|v| StatEntry::new(key.clone(), v)))
            .collect();
    }

    if let Some(Value::Array(stats)) = fields.get("stats") {
        return stats
            .iter()
            .filter_map(|entry| {
                let key = entry.get("stat")?.get("name").and_then(non_blank_str)?;
                let value = entry.get("base_stat").and_then(as_integer)?;
                Some(StatEntry::new(key, value))
            })
            .collect();
    }

    Vec::new()
}

fn read_image(fields: &Map<String, Value>) -> Option<String> {
    fields
        .get("image")
        .and_then(non_blank_str)
        .or_else(|| fields.get("sprite").and_then(non_blank_str))
        .or_else(|| {
            fields
                .get("sprites")
                .and_then(|sprites| sprites.get("front_default"))
                .and_then(non_blank_str)
        })
        .map(str::to_string)
}

fn non_blank_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|text| !text.trim().is_empty())
}

/// Reads an integer from a JSON number or numeric string.
///
/// Fractional numbers truncate toward zero; non-finite or non-numeric values
/// yield `None`.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|v| v.is_finite() && v.abs() < i64::MAX as f64)
                .map(|v| v.trunc() as i64)
        }),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{as_integer, normalize};
    use serde_json::json;

    #[test]
    fn as_integer_accepts_numeric_strings_and_truncates_floats() {
        assert_eq!(as_integer(&json!("42")), Some(42));
        assert_eq!(as_integer(&json!(6.9)), Some(6));
        assert_eq!(as_integer(&json!("n/a")), None);
        assert_eq!(as_integer(&json!(null)), None);
    }

    #[test]
    fn non_object_input_degrades_to_placeholder() {
        let record = normalize(&json!("not a record"));
        assert_eq!(record.id, 0);
        assert_eq!(record.display_name, "#0");
        assert!(record.categories.is_empty());
    }
}
