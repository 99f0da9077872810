//! Create/update form payload.
//!
//! # Responsibility
//! - Mirror the backend's pre-normalization record body.
//! - Enforce required-field rules before a mutation is submitted.
//!
//! # Invariants
//! - A deserialized draft has already passed `RecordDraft::validate()`.
//! - Category order is the order in which the user toggled them on.

use crate::model::record::{CanonicalRecord, RecordId};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Categories offered by the edit form.
pub const AVAILABLE_CATEGORIES: [&str; 17] = [
    "Normal", "Fire", "Water", "Grass", "Flying", "Fight", "Poison", "Ground", "Rock", "Bug",
    "Ghost", "Steel", "Psychic", "Ice", "Dragon", "Dark", "Fairy",
];

/// Inclusive upper bound accepted for any base stat.
pub const STAT_MAX: i64 = 999;

/// Validation failures for [`RecordDraft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValidationError {
    /// `id` is zero (unset).
    MissingId,
    /// French name is blank.
    MissingFrenchName,
    /// No category selected.
    NoCategories,
    UnknownCategory(String),
    StatOutOfRange {
        stat: &'static str,
        value: i64,
    },
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingId => write!(f, "id is required and must be positive"),
            Self::MissingFrenchName => write!(f, "french name is required"),
            Self::NoCategories => write!(f, "at least one type is required"),
            Self::UnknownCategory(value) => write!(f, "unknown type `{value}`"),
            Self::StatOutOfRange { stat, value } => {
                write!(f, "{stat} ({value}) must be within 0..={STAT_MAX}")
            }
        }
    }
}

impl Error for DraftValidationError {}

/// Per-language record names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedName {
    pub french: String,
    pub english: String,
    pub japanese: String,
    pub chinese: String,
}

/// Base stats block, serialized with the backend's key casing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BaseStats {
    #[serde(rename = "HP", skip_serializing_if = "Option::is_none")]
    pub hp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defense: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_attack: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_defense: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<i64>,
}

impl BaseStats {
    fn labelled(&self) -> [(&'static str, Option<i64>); 6] {
        [
            ("HP", self.hp),
            ("Attack", self.attack),
            ("Defense", self.defense),
            ("SpecialAttack", self.special_attack),
            ("SpecialDefense", self.special_defense),
            ("Speed", self.speed),
        ]
    }
}

/// Mutation body for `POST` / `PUT`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedDraft")]
pub struct RecordDraft {
    pub id: RecordId,
    pub name: LocalizedName,
    #[serde(rename = "type")]
    pub categories: Vec<String>,
    pub base: BaseStats,
    pub image: String,
}

#[derive(Deserialize)]
struct UncheckedDraft {
    #[serde(default)]
    id: RecordId,
    #[serde(default)]
    name: LocalizedName,
    #[serde(default, rename = "type")]
    categories: Vec<String>,
    #[serde(default)]
    base: BaseStats,
    #[serde(default)]
    image: String,
}

impl TryFrom<UncheckedDraft> for RecordDraft {
    type Error = DraftValidationError;

    fn try_from(value: UncheckedDraft) -> Result<Self, Self::Error> {
        let draft = Self {
            id: value.id,
            name: value.name,
            categories: value.categories,
            base: value.base,
            image: value.image,
        };
        draft.validate()?;
        Ok(draft)
    }
}

impl RecordDraft {
    /// Empty creation form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills an edit form from a displayed record.
    ///
    /// The display name lands in `name.french`; other languages stay blank
    /// because the canonical record only keeps one name.
    pub fn from_record(record: &CanonicalRecord) -> Self {
        Self {
            id: record.id,
            name: LocalizedName {
                french: record.display_name.clone(),
                ..LocalizedName::default()
            },
            categories: record.categories.clone(),
            base: BaseStats {
                hp: record.vitality,
                attack: record.power,
                defense: record.stat("defense"),
                special_attack: record.stat("special-attack"),
                special_defense: record.stat("special-defense"),
                speed: record.stat("speed"),
            },
            image: record.image_ref.clone().unwrap_or_default(),
        }
    }

    /// Adds the category when absent, removes it when present.
    pub fn toggle_category(&mut self, category: &str) {
        if let Some(position) = self.categories.iter().position(|c| c == category) {
            self.categories.remove(position);
        } else {
            self.categories.push(category.to_string());
        }
    }

    /// Checks required fields, category names and stat ranges.
    ///
    /// # Errors
    /// - Returns the first failing rule in field order.
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.id == 0 {
            return Err(DraftValidationError::MissingId);
        }
        if self.name.french.trim().is_empty() {
            return Err(DraftValidationError::MissingFrenchName);
        }
        if self.categories.is_empty() {
            return Err(DraftValidationError::NoCategories);
        }
        if let Some(unknown) = self
            .categories
            .iter()
            .find(|c| !AVAILABLE_CATEGORIES.contains(&c.as_str()))
        {
            return Err(DraftValidationError::UnknownCategory(unknown.clone()));
        }
        for (stat, value) in self.base.labelled() {
            if let Some(value) = value {
                if !(0..=STAT_MAX).contains(&value) {
                    return Err(DraftValidationError::StatOutOfRange { stat, value });
                }
            }
        }
        Ok(())
    }
}
