use pokedex_core::{
    ApiError, ApplyOutcome, CatalogConfig, CatalogService, CategoriesEnvelope, PageEnvelope,
    PageItem, ValueRange,
};
use serde_json::json;

fn page(records: serde_json::Value, total_count: u64) -> PageEnvelope {
    PageEnvelope::from_value(&json!({
        "pokemons": records,
        "pagination": { "totalCount": total_count }
    }))
    .unwrap()
}

fn first_page() -> PageEnvelope {
    page(
        json!([
            { "id": 4, "name": "Charmander", "type": ["Fire"], "base": { "HP": 39, "Attack": 52 }, "weight": 85 },
            { "id": 7, "name": "Squirtle", "type": ["Water"], "base": { "HP": 44, "Attack": 48 }, "weight": 90 },
            { "id": 6, "name": "Charizard", "type": ["Fire", "Flying"], "base": { "HP": 78, "Attack": 84 }, "weight": 905 }
        ]),
        100,
    )
}

fn service() -> CatalogService {
    CatalogService::new(CatalogConfig {
        page_size: 10,
        ..CatalogConfig::default()
    })
}

#[test]
fn applied_page_seeds_bounds_and_filter_ranges() {
    let mut service = service();
    let (ticket, request) = service.begin_fetch();
    assert_eq!(request.path_and_query(), "/pokemons?page=1&limit=10");

    assert_eq!(service.apply_page(ticket, first_page()), ApplyOutcome::Applied);
    let bounds = *service.bounds().unwrap();
    assert_eq!(bounds.vitality, ValueRange::new(39, 78));
    assert_eq!(service.filter().vitality_range, bounds.vitality);
    assert_eq!(service.filter().mass_range, ValueRange::new(85, 905));
    assert_eq!(service.visible().len(), 3);
    assert_eq!(service.page().total_pages(), 10);
}

#[test]
fn slider_edit_narrows_visible_without_moving_bounds() {
    let mut service = service();
    let (ticket, _) = service.begin_fetch();
    service.apply_page(ticket, first_page());

    service.update_filter(|filter| {
        let range = filter.vitality_range.with_hi(50);
        filter.with_vitality_range(range)
    });
    let visible = service
        .visible()
        .into_iter()
        .map(|record| record.id)
        .collect::<Vec<_>>();
    assert_eq!(visible, vec![4, 7]);
    assert_eq!(service.bounds().unwrap().vitality, ValueRange::new(39, 78));
}

#[test]
fn stale_response_is_discarded_even_when_it_arrives_last() {
    let mut service = service();
    let (old_ticket, _) = service.begin_fetch();
    service.set_query("squirt");
    let (new_ticket, request) = service.begin_fetch();
    assert_eq!(
        request.path_and_query(),
        "/pokemons?page=1&limit=10&search=squirt"
    );

    let fresh = page(json!([{ "id": 7, "name": "Squirtle" }]), 1);
    assert_eq!(service.apply_page(new_ticket, fresh), ApplyOutcome::Applied);
    assert_eq!(service.apply_page(old_ticket, first_page()), ApplyOutcome::Stale);

    assert_eq!(service.records().len(), 1);
    assert_eq!(service.records()[0].id, 7);
}

#[test]
fn failure_keeps_previous_dataset_and_surfaces_message() {
    let mut service = service();
    let (ticket, _) = service.begin_fetch();
    service.apply_page(ticket, first_page());

    service.next_page();
    let (ticket, request) = service.begin_fetch();
    assert_eq!(request.page, 2);
    let err = ApiError::MalformedEnvelope("expected a `pokemons` or `items` array".to_string());
    assert_eq!(service.apply_failure(ticket, &err), ApplyOutcome::Applied);

    assert_eq!(service.records().len(), 3);
    assert!(service
        .last_error()
        .unwrap()
        .contains("malformed server payload"));

    let (ticket, _) = service.begin_fetch();
    service.apply_page(ticket, first_page());
    assert_eq!(service.last_error(), None);
}

#[test]
fn stale_failure_is_ignored() {
    let mut service = service();
    let (old_ticket, _) = service.begin_fetch();
    let _ = service.begin_fetch();
    assert_eq!(
        service.apply_failure(old_ticket, &"timeout"),
        ApplyOutcome::Stale
    );
    assert_eq!(service.last_error(), None);
}

#[test]
fn refresh_with_fewer_results_clamps_current_page() {
    let mut service = service();
    let (ticket, _) = service.begin_fetch();
    service.apply_page(ticket, first_page());
    service.go_to(8);
    assert_eq!(service.page().current_page(), 8);

    let (ticket, _) = service.begin_fetch();
    service.apply_page(ticket, page(json!([{ "id": 1 }]), 25));
    assert_eq!(service.page().total_pages(), 3);
    assert_eq!(service.page().current_page(), 3);
}

#[test]
fn query_and_category_changes_return_to_first_page() {
    let mut service = service();
    let (ticket, _) = service.begin_fetch();
    service.apply_page(ticket, first_page());
    service.go_to(5);

    service.toggle_category("Fire");
    assert_eq!(service.page().current_page(), 1);
    let (_, request) = service.begin_fetch();
    assert_eq!(request.category.as_deref(), Some("Fire"));

    service.toggle_category("Water");
    let (_, request) = service.begin_fetch();
    assert_eq!(request.category, None);
}

#[test]
fn categories_fall_back_to_dataset_until_loaded() {
    let mut service = service();
    let (ticket, _) = service.begin_fetch();
    service.apply_page(ticket, first_page());
    assert_eq!(service.categories(), vec!["Fire", "Flying", "Water"]);

    service.set_categories(CategoriesEnvelope {
        categories: vec!["Bug".to_string(), "Fire".to_string()],
    });
    assert_eq!(service.categories(), vec!["Bug", "Fire"]);
}

#[test]
fn snapshot_carries_window_and_visible_records() {
    let mut service = service();
    let (ticket, _) = service.begin_fetch();
    service.apply_page(ticket, first_page());
    service.go_to(5);
    service.update_filter(|filter| filter.with_query("char"));

    let snapshot = service.snapshot();
    assert_eq!(snapshot.total_pages, 10);
    assert_eq!(snapshot.visible.len(), 2);
    assert_eq!(snapshot.page_window[0], PageItem::Page(1));
    assert_eq!(snapshot.page_window[1], PageItem::Ellipsis);
    assert_eq!(snapshot.error, None);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["page_window"][1], "ellipsis");
    assert_eq!(json["page_window"][0], json!({ "page": 1 }));
}

#[test]
fn page_count_alone_still_allows_navigation() {
    let mut service = service();
    let items = (1..=10)
        .map(|id| json!({ "id": id, "name": format!("Mon {id}") }))
        .collect::<Vec<_>>();
    let envelope = PageEnvelope::from_value(&json!({
        "pokemons": items,
        "pagination": { "totalPages": 5 }
    }))
    .unwrap();
    assert_eq!(envelope.total_count, 10);
    assert_eq!(envelope.total_count_for(10), 41);

    let (ticket, _) = service.begin_fetch();
    service.apply_page(ticket, envelope);
    assert_eq!(service.page().total_pages(), 5);

    service.next_page();
    assert_eq!(service.page().current_page(), 2);
    let (_, request) = service.begin_fetch();
    assert_eq!(request.page, 2);
}

#[test]
fn reported_total_count_wins_over_page_count() {
    let envelope = PageEnvelope::from_value(&json!({
        "pokemons": [{ "id": 1 }],
        "pagination": { "totalPages": 3, "totalCount": 25 }
    }))
    .unwrap();
    assert_eq!(envelope.total_count_for(10), 25);
    assert_eq!(envelope.total_count_for(20), 41);
}
