use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch},
};

use crate::{
    dto::cart::{AddToCartRequest, CartSummary, UpdateQuantityRequest},
    error::AppResult,
    models::CartEntry,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_summary).post(add_to_cart))
        .route("/{product_id}", patch(update_quantity).delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart lines priced from the live catalog", body = ApiResponse<CartSummary>)
    ),
    tag = "Cart"
)]
pub async fn cart_summary(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CartSummary>>> {
    let shop = state.shop.lock().await;
    let summary = shop.cart_summary();
    let meta = Meta::empty().with_cart_count(summary.count);
    Ok(Json(ApiResponse::success("OK", summary, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "One unit added", body = ApiResponse<CartEntry>),
        (status = 400, description = "Unknown product, sold out or stock limit reached"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartEntry>>> {
    let mut shop = state.shop.lock().await;
    let applied = shop.add_to_cart(payload.product_id)?;
    let meta = Meta::empty().with_cart_count(shop.cart_count());
    Ok(Json(ApiResponse::success(applied.notice, applied.value, Some(meta))))
}

#[utoipa::path(
    patch,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Quantity changed; data is null once the line is gone", body = ApiResponse<CartEntry>),
        (status = 400, description = "Stock limit reached"),
    ),
    tag = "Cart"
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> AppResult<Json<ApiResponse<Option<CartEntry>>>> {
    let mut shop = state.shop.lock().await;
    let applied = shop.update_quantity(product_id, payload.delta)?;
    let meta = Meta::empty().with_cart_count(shop.cart_count());
    Ok(Json(ApiResponse::success(applied.notice, applied.value, Some(meta))))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "OK", body = ApiResponse<serde_json::Value>),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let mut shop = state.shop.lock().await;
    let applied = shop.remove_from_cart(product_id);
    let meta = Meta::empty().with_cart_count(shop.cart_count());
    Ok(Json(ApiResponse::success(
        applied.notice,
        serde_json::json!({}),
        Some(meta),
    )))
}
