use local_storefront::{
    catalog::sample_products,
    render::{Page, RecordingRenderer},
    routes::params::{ProductQuery, ProductSortBy, SortOrder},
    services::product_service,
    state::ShopState,
    store::MemoryStore,
    storefront::Storefront,
};

fn state() -> ShopState {
    ShopState::new(sample_products())
}

#[test]
fn sample_catalog_has_six_stocked_products() {
    let products = sample_products();

    assert_eq!(products.len(), 6);
    assert!(products.iter().all(|p| p.stock > 0));
    assert_eq!(products[0].name, "iPhone 15 Pro");
    assert_eq!(products[0].price, 8999);
    assert!(products[5].image_url.ends_with("text=HomePod+mini"));
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let state = state();

    let by_name = product_service::search_products(&state, "IPAD");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, 4);

    let by_description = product_service::search_products(&state, "noise");
    assert_eq!(by_description[0].name, "AirPods Pro");

    let by_category = product_service::search_products(&state, "electronics");
    assert_eq!(by_category.len(), 6);
}

#[test]
fn empty_term_matches_everything_and_misses_match_nothing() {
    let state = state();

    assert_eq!(product_service::search_products(&state, "").len(), 6);
    assert!(product_service::search_products(&state, "toaster").is_empty());
}

#[test]
fn search_does_not_mutate_state() {
    let state = state();
    let before = state.clone();

    let _ = product_service::search_products(&state, "pro");

    assert_eq!(state, before);
}

#[test]
fn list_products_sorts_and_pages() {
    let state = state();

    let (cheapest_first, total) = product_service::list_products(
        &state,
        &ProductQuery {
            sort_by: Some(ProductSortBy::Price),
            sort_order: Some(SortOrder::Asc),
            per_page: Some(2),
            ..Default::default()
        },
    );
    assert_eq!(total, 6);
    assert_eq!(cheapest_first.len(), 2);
    assert_eq!(cheapest_first[0].name, "HomePod mini");

    let (second_page, _) = product_service::list_products(
        &state,
        &ProductQuery {
            page: Some(2),
            per_page: Some(4),
            ..Default::default()
        },
    );
    assert_eq!(
        second_page.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![5, 6]
    );
}

#[test]
fn huge_page_number_yields_empty_page() {
    let state = state();

    let (items, total) = product_service::list_products(
        &state,
        &ProductQuery {
            page: Some(i64::MAX),
            per_page: Some(20),
            ..Default::default()
        },
    );

    assert_eq!(total, 6);
    assert!(items.is_empty());
}

#[test]
fn featured_shows_first_three() {
    let featured = product_service::featured_products(&state());

    assert_eq!(
        featured.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn page_resolution_strips_paths_and_falls_back_home() {
    assert_eq!(Page::from_path("cart.html"), Page::Cart);
    assert_eq!(Page::from_path("/shop/orders.html"), Page::Orders);
    assert_eq!(Page::from_path("admin"), Page::Admin);
    assert_eq!(Page::from_path(""), Page::Index);
    assert_eq!(Page::from_path("checkout.html"), Page::Index);
}

#[test]
fn navigate_renders_requested_page() {
    let renderer = RecordingRenderer::new();
    let mut shop = Storefront::open(MemoryStore::new(), renderer.clone());

    shop.navigate(Page::from_path("products.html"));

    assert_eq!(renderer.last_page(), Some(Page::Products));
    assert_eq!(shop.search("").len(), 6);
}
