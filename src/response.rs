use serde::Serialize;
use utoipa::ToSchema;

/// Envelope metadata. Paging fields are set on list endpoints, `cart_count`
/// on every response produced after a storefront action so clients can
/// refresh the cart badge without another round trip.
#[derive(Debug, Serialize, ToSchema, Clone, Default, PartialEq)]
pub struct Meta {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub total: Option<i64>,
    pub cart_count: Option<u32>,
}

impl Meta {
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            total: Some(total),
            cart_count: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_cart_count(mut self, count: u32) -> Self {
        self.cart_count = Some(count);
        self
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}
