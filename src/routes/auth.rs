use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::auth::{LoginRequest, RegisterRequest},
    error::AppResult,
    models::User,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Local account created and signed in", body = ApiResponse<User>),
        (status = 400, description = "Missing fields")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let mut shop = state.shop.lock().await;
    let applied = shop.register(&payload.name, &payload.email, &payload.password)?;
    Ok(Json(ApiResponse::success(applied.notice, applied.value, None)))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = ApiResponse<User>),
        (status = 400, description = "Missing email or password")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let mut shop = state.shop.lock().await;
    let applied = shop.login(&payload.email, &payload.password)?;
    Ok(Json(ApiResponse::success(
        applied.notice,
        applied.value,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Signed out", body = ApiResponse<serde_json::Value>)
    ),
    tag = "Auth"
)]
pub async fn logout(State(state): State<AppState>) -> Json<ApiResponse<serde_json::Value>> {
    let mut shop = state.shop.lock().await;
    let applied = shop.logout();
    Json(ApiResponse::success(
        applied.notice,
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user, data is null when signed out", body = ApiResponse<User>)
    ),
    tag = "Auth"
)]
pub async fn me(State(state): State<AppState>) -> Json<ApiResponse<Option<User>>> {
    let shop = state.shop.lock().await;
    Json(ApiResponse::success(
        "OK",
        shop.current_user().cloned(),
        Some(Meta::empty().with_cart_count(shop.cart_count())),
    ))
}
