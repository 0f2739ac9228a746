use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Order, Product};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderLine {
    pub product: Product,
    pub quantity: u32,
    pub line_total: i64,
}

/// An order as displayed in the history: lines are priced from the live
/// catalog, so `liveTotal` can differ from the amount charged at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub order: Order,
    pub status_label: String,
    pub status_color: String,
    pub lines: Vec<OrderLine>,
    pub live_total: i64,
    pub price_drift: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<OrderView>,
}
