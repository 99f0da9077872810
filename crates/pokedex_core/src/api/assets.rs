//! Static asset URLs served by the backend.
//!
//! Type icons are numbered `1.png` .. `18.png`; `18` is the unknown type.

use crate::model::record::RecordId;

pub const UNKNOWN_CATEGORY_ICON: u8 = 18;

const CATEGORY_ICONS: [(&str, u8); 20] = [
    ("Normal", 1),
    ("Fire", 2),
    ("Water", 3),
    ("Grass", 4),
    ("Flying", 5),
    ("Fight", 6),
    ("Fighting", 6),
    ("Poison", 7),
    ("Ground", 8),
    ("Rock", 9),
    ("Bug", 10),
    ("Ghost", 11),
    ("Steel", 12),
    ("Psychic", 13),
    ("Ice", 14),
    ("Dragon", 15),
    ("Dark", 16),
    ("Fairy", 17),
    ("Unknow", 18),
    ("Unknown", 18),
];

/// Icon number for a category name; unrecognized names map to unknown.
pub fn category_icon_id(category: &str) -> u8 {
    CATEGORY_ICONS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, id)| *id)
        .unwrap_or(UNKNOWN_CATEGORY_ICON)
}

/// `{base}/assets/types/{n}.png`
pub fn category_icon_url(base_url: &str, category: &str) -> String {
    format!(
        "{}/assets/types/{}.png",
        base_url.trim_end_matches('/'),
        category_icon_id(category)
    )
}

/// `{base}/assets/pokemons/{id}.png`
pub fn record_image_url(base_url: &str, id: RecordId) -> String {
    format!("{}/assets/pokemons/{id}.png", base_url.trim_end_matches('/'))
}
