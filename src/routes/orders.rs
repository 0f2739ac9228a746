use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    dto::orders::{OrderList, OrderView},
    error::AppResult,
    models::Order,
    response::{ApiResponse, Meta},
    routes::params::OrderListQuery,
    services::order_service,
    state::AppState,
};

pub fn route() -> Router<AppState> {
    Router::new()
        .route("/", get(list_order))
        .route("/checkout", post(checkout))
        .route("/{id}", get(get_order))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(
        ("status" = Option<String>, Query, description = "pending | processing | shipped | delivered | cancelled"),
        ("sort_order" = Option<String>, Query, description = "asc (default) | desc"),
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "Order history", body = ApiResponse<OrderList>)
    ),
    tag = "Orders"
)]
pub async fn list_order(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let shop = state.shop.lock().await;
    let (items, total) = order_service::list_orders(shop.state(), &query);
    let (page, per_page, _) = query.pagination().normalize();
    let meta = Meta::new(page, per_page, total).with_cart_count(shop.cart_count());
    Ok(Json(ApiResponse::success("Ok", OrderList { items }, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/api/orders/checkout",
    responses(
        (status = 200, description = "Cart turned into a pending order", body = ApiResponse<Order>),
        (status = 400, description = "Cart is empty")
    ),
    tag = "Orders"
)]
pub async fn checkout(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Order>>> {
    let mut shop = state.shop.lock().await;
    let applied = shop.checkout()?;
    let meta = Meta::empty().with_cart_count(shop.cart_count());
    Ok(Json(ApiResponse::success(applied.notice, applied.value, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order with live-priced lines", body = ApiResponse<OrderView>),
        (status = 404, description = "Unknown order")
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<OrderView>>> {
    let shop = state.shop.lock().await;
    let view = order_service::get_order(shop.state(), id)?;
    Ok(Json(ApiResponse::success("OK", view, Some(Meta::empty()))))
}
