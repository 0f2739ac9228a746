use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Order, Product};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ClearDataRequest {
    #[serde(default)]
    pub confirm: bool,
}

/// Counts shown on the admin page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub product_count: usize,
    pub order_count: usize,
}

/// Read-only dump offered as a download. It is never loaded back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub export_time: DateTime<Utc>,
}

impl ExportSnapshot {
    pub fn file_name(&self) -> String {
        format!(
            "shopping_platform_data_{}.json",
            self.export_time.timestamp_millis()
        )
    }
}
