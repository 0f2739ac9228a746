use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    pub delta: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    pub line_total: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CartSummary {
    pub items: Vec<CartLine>,
    pub count: u32,
    pub total_amount: i64,
}
