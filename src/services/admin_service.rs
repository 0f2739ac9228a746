use chrono::{DateTime, Utc};

use crate::{
    dto::admin::{AdminStats, ExportSnapshot},
    state::ShopState,
};

pub fn stats(state: &ShopState) -> AdminStats {
    AdminStats {
        product_count: state.products.len(),
        order_count: state.orders.len(),
    }
}

pub fn export_snapshot(state: &ShopState, now: DateTime<Utc>) -> ExportSnapshot {
    ExportSnapshot {
        products: state.products.clone(),
        orders: state.orders.clone(),
        export_time: now,
    }
}

/// Resets cart and order history. Catalog and signed-in user stay as they are.
pub fn clear_all(state: &mut ShopState) {
    state.cart.clear();
    state.orders.clear();
}
