use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::products::ProductList,
    error::AppResult,
    models::Product,
    response::{ApiResponse, Meta},
    routes::params::ProductQuery,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/featured", get(featured_products))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive match on name, description or category"),
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("sort_by" = Option<String>, Query, description = "id | price | name"),
        ("sort_order" = Option<String>, Query, description = "asc | desc")
    ),
    responses(
        (status = 200, description = "Search the catalog", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let shop = state.shop.lock().await;
    let (items, total) = product_service::list_products(shop.state(), &query);
    let (page, per_page, _) = query.pagination().normalize();
    let meta = Meta::new(page, per_page, total).with_cart_count(shop.cart_count());
    Ok(Json(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    get,
    path = "/api/products/featured",
    responses(
        (status = 200, description = "Products shown on the home page", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn featured_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let shop = state.shop.lock().await;
    let items = shop.featured_products();
    let meta = Meta::empty().with_cart_count(shop.cart_count());
    Ok(Json(ApiResponse::success(
        "Featured",
        ProductList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product detail", body = ApiResponse<Product>),
        (status = 404, description = "Unknown product")
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let shop = state.shop.lock().await;
    let product = product_service::get_product(shop.state(), id)?;
    Ok(Json(ApiResponse::success("Product", product, None)))
}
