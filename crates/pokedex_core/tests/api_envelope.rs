use pokedex_core::api::assets::{category_icon_id, category_icon_url, record_image_url};
use pokedex_core::{load_page_file, ApiError, CategoriesEnvelope, PageEnvelope};
use std::io::Write;

const LISTING: &str = r#"{
    "pokemons": [
        { "id": 1, "name": { "french": "Bulbizarre", "english": "Bulbasaur" }, "type": ["Grass", "Poison"], "base": { "HP": 45, "Attack": 49 } },
        { "id": 4, "name": { "french": "Salamèche" }, "type": ["Fire"], "base": { "HP": 39, "Attack": 52 } }
    ],
    "pagination": { "page": 1, "totalPages": 12, "totalCount": 24 }
}"#;

#[test]
fn listing_envelope_decodes_records_and_pagination() {
    let envelope = PageEnvelope::from_json(LISTING).unwrap();
    assert_eq!(envelope.total_pages, 12);
    assert_eq!(envelope.total_count, 24);
    let names = envelope
        .records
        .iter()
        .map(|record| record.display_name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Bulbizarre", "Salamèche"]);
}

#[test]
fn items_key_and_missing_pagination_fall_back_to_item_count() {
    let envelope = PageEnvelope::from_json(r#"{ "items": [{ "id": 1 }, { "id": 2 }] }"#).unwrap();
    assert_eq!(envelope.total_count, 2);
    assert_eq!(envelope.total_pages, 1);
}

#[test]
fn bare_array_is_accepted() {
    let envelope = PageEnvelope::from_json(r#"[{ "id": 9, "name": "Blastoise" }]"#).unwrap();
    assert_eq!(envelope.records.len(), 1);
    assert_eq!(envelope.records[0].display_name, "Blastoise");
}

#[test]
fn garbled_pagination_degrades_instead_of_failing() {
    let envelope =
        PageEnvelope::from_json(r#"{ "items": [{ "id": 1 }], "pagination": "soon" }"#).unwrap();
    assert_eq!(envelope.total_count, 1);
    assert_eq!(envelope.total_pages, 1);
}

#[test]
fn envelope_without_items_is_malformed() {
    let err = PageEnvelope::from_json(r#"{ "data": [] }"#).unwrap_err();
    assert!(matches!(err, ApiError::MalformedEnvelope(_)));

    let err = PageEnvelope::from_json("42").unwrap_err();
    assert!(matches!(err, ApiError::MalformedEnvelope(_)));
}

#[test]
fn invalid_json_surfaces_parse_error() {
    let err = PageEnvelope::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ApiError::Json(_)));
    assert!(err.to_string().contains("invalid JSON payload"));
}

#[test]
fn categories_envelope_accepts_both_keys() {
    let from_types = CategoriesEnvelope::from_json(r#"{ "types": ["Fire", "Water"] }"#).unwrap();
    let from_categories = CategoriesEnvelope::from_json(r#"{ "categories": ["Fire", "Water"] }"#).unwrap();
    assert_eq!(from_types, from_categories);
    assert_eq!(from_types.categories, vec!["Fire", "Water"]);
}

#[test]
fn page_file_loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(LISTING.as_bytes()).unwrap();

    let envelope = load_page_file(file.path()).unwrap();
    assert_eq!(envelope.records.len(), 2);
}

#[test]
fn missing_page_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    let err = load_page_file(&missing).unwrap_err();
    assert!(matches!(err, ApiError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn asset_urls_use_icon_numbers() {
    assert_eq!(category_icon_id("Fire"), 2);
    assert_eq!(category_icon_id("Fighting"), category_icon_id("Fight"));
    assert_eq!(category_icon_id("Shadow"), 18);
    assert_eq!(
        category_icon_url("http://localhost:3000/", "Water"),
        "http://localhost:3000/assets/types/3.png"
    );
    assert_eq!(
        record_image_url("http://localhost:3000", 25),
        "http://localhost:3000/assets/pokemons/25.png"
    );
}
