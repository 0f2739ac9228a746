use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::response::{ApiResponse, Meta};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Product {0} does not exist")]
    ProductNotFound(i64),

    #[error("{0} is sold out")]
    SoldOut(String),

    #[error("Insufficient stock for {name}: {available} available")]
    InsufficientStock { name: String, available: u32 },

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Please fill in {0}")]
    MissingFields(&'static str),

    #[error("Confirmation required: this erases the cart and order history")]
    ConfirmationRequired,

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Errors caused by what the shopper entered or clicked. These are shown
    /// as an alert and never change state.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::BadRequest(_)
                | AppError::ProductNotFound(_)
                | AppError::SoldOut(_)
                | AppError::InsufficientStock { .. }
                | AppError::EmptyCart
                | AppError::MissingFields(_)
                | AppError::ConfirmationRequired
        )
    }
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };

        let body = ApiResponse {
            message: self.to_string(),
            data: Some(ErrorData {
                error: self.to_string(),
            }),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
