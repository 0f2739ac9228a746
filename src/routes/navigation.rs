use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    render::Page,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/{page}", get(navigate))
}

/// Resolves a page name or link target; unknown pages land on the home page.
#[utoipa::path(
    get,
    path = "/api/navigate/{page}",
    params(
        ("page" = String, Path, description = "Page name or link such as cart.html")
    ),
    responses(
        (status = 200, description = "Page that was rendered", body = ApiResponse<Page>)
    ),
    tag = "Navigation"
)]
pub async fn navigate(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Json<ApiResponse<Page>> {
    let page = Page::from_path(&page);
    let mut shop = state.shop.lock().await;
    shop.navigate(page);
    Json(ApiResponse::success(
        page.as_str(),
        page,
        Some(Meta::empty().with_cart_count(shop.cart_count())),
    ))
}
