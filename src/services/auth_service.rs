use chrono::{DateTime, Utc};

use crate::{
    dto::auth::{LoginRequest, RegisterRequest},
    error::{AppError, AppResult},
    models::User,
    state::ShopState,
};

pub const DEMO_USER_ID: i64 = 1;
pub const DEMO_USER_NAME: &str = "Test User";

/// Demo sign-in: any non-empty email/password pair is accepted.
pub fn login_user(state: &mut ShopState, payload: LoginRequest) -> AppResult<User> {
    let LoginRequest { email, password } = payload;
    if email.is_empty() || password.is_empty() {
        return Err(AppError::MissingFields("email and password"));
    }

    let user = User {
        id: DEMO_USER_ID,
        name: DEMO_USER_NAME.to_string(),
        email,
    };
    state.user = Some(user.clone());
    Ok(user)
}

/// Creates a local account. Emails are not checked for duplicates and the
/// password is not kept anywhere.
pub fn register_user(
    state: &mut ShopState,
    payload: RegisterRequest,
    now: DateTime<Utc>,
) -> AppResult<User> {
    let RegisterRequest {
        name,
        email,
        password,
    } = payload;
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AppError::MissingFields("name, email and password"));
    }

    let user = User {
        id: now.timestamp_millis(),
        name,
        email,
    };
    state.user = Some(user.clone());
    Ok(user)
}

pub fn logout_user(state: &mut ShopState) -> Option<User> {
    state.user.take()
}
