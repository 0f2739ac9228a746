use crate::{
    error::{AppError, AppResult},
    models::Product,
    routes::params::{ProductQuery, ProductSortBy, SortOrder},
    state::ShopState,
};

const FEATURED_COUNT: usize = 3;

/// Case-insensitive substring match on name, description or category.
/// An empty term matches everything.
pub fn search_products(state: &ShopState, term: &str) -> Vec<Product> {
    let needle = term.to_lowercase();
    state
        .products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Search plus sorting and paging. Returns the page and the match count.
pub fn list_products(state: &ShopState, query: &ProductQuery) -> (Vec<Product>, i64) {
    let mut items = search_products(state, query.q.as_deref().unwrap_or_default());

    match query.sort_by.unwrap_or(ProductSortBy::Id) {
        ProductSortBy::Id => items.sort_by_key(|p| p.id),
        ProductSortBy::Price => items.sort_by_key(|p| p.price),
        ProductSortBy::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    if let Some(SortOrder::Desc) = query.sort_order {
        items.reverse();
    }
    let total = items.len() as i64;

    let (skip, take) = query.pagination().window();
    let page = items
        .into_iter()
        .skip(skip)
        .take(take)
        .collect();
    (page, total)
}

pub fn featured_products(state: &ShopState) -> Vec<Product> {
    state.products.iter().take(FEATURED_COUNT).cloned().collect()
}

pub fn get_product(state: &ShopState, id: i64) -> AppResult<Product> {
    state.product(id).cloned().ok_or(AppError::NotFound)
}
