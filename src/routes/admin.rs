use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    dto::admin::{AdminStats, ClearDataRequest, ExportSnapshot},
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(admin_stats))
        .route("/export", get(export_data))
        .route("/clear", post(clear_all_data))
}

#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Product and order counts", body = ApiResponse<AdminStats>)
    ),
    tag = "Admin"
)]
pub async fn admin_stats(State(state): State<AppState>) -> Json<ApiResponse<AdminStats>> {
    let shop = state.shop.lock().await;
    Json(ApiResponse::success(
        "Admin statistics",
        shop.admin_stats(),
        None,
    ))
}

#[utoipa::path(
    get,
    path = "/api/admin/export",
    responses(
        (status = 200, description = "Catalog and order history as a JSON download", body = ExportSnapshot)
    ),
    tag = "Admin"
)]
pub async fn export_data(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let snapshot = state.shop.lock().await.export_data();
    let body = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?;
    let disposition = format!("attachment; filename=\"{}\"", snapshot.file_name());
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

#[utoipa::path(
    post,
    path = "/api/admin/clear",
    request_body = ClearDataRequest,
    responses(
        (status = 200, description = "Cart and order history erased", body = ApiResponse<serde_json::Value>),
        (status = 400, description = "Confirmation missing")
    ),
    tag = "Admin"
)]
pub async fn clear_all_data(
    State(state): State<AppState>,
    Json(payload): Json<ClearDataRequest>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let mut shop = state.shop.lock().await;
    let applied = shop.clear_all_data(payload.confirm)?;
    let meta = Meta::empty().with_cart_count(shop.cart_count());
    Ok(Json(ApiResponse::success(
        applied.notice,
        serde_json::json!({}),
        Some(meta),
    )))
}
