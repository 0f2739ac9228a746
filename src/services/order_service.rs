use chrono::{DateTime, Utc};

use crate::{
    dto::orders::{OrderLine, OrderView},
    error::{AppError, AppResult},
    models::{Order, OrderStatus},
    routes::params::{OrderListQuery, SortOrder},
    state::ShopState,
};

/// Turns the cart into a pending order and empties the cart.
///
/// The order copies the cart entries as they are and fixes `total_amount`
/// from catalog prices at this moment. Stock is left untouched.
pub fn checkout(state: &mut ShopState, now: DateTime<Utc>) -> AppResult<Order> {
    if state.cart.is_empty() {
        return Err(AppError::EmptyCart);
    }

    let items = state.cart.clone();
    let order = Order {
        id: next_order_id(state, now),
        total_amount: state.price_of(&items),
        items,
        status: OrderStatus::Pending,
        created_at: now,
    };

    state.orders.push(order.clone());
    state.cart.clear();
    Ok(order)
}

// Millisecond timestamp, bumped past the newest id so two checkouts in the
// same millisecond still get distinct ids.
fn next_order_id(state: &ShopState, now: DateTime<Utc>) -> i64 {
    let stamp = now.timestamp_millis();
    match state.orders.iter().map(|o| o.id).max() {
        Some(last) if last >= stamp => last + 1,
        _ => stamp,
    }
}

pub fn order_view(state: &ShopState, order: &Order) -> OrderView {
    let lines: Vec<OrderLine> = order
        .items
        .iter()
        .filter_map(|item| {
            let product = state.product(item.product_id)?;
            Some(OrderLine {
                line_total: product.price * i64::from(item.quantity),
                product: product.clone(),
                quantity: item.quantity,
            })
        })
        .collect();
    let live_total = state.price_of(&order.items);

    OrderView {
        status_label: order.status.label().to_string(),
        status_color: order.status.color().to_string(),
        price_drift: live_total != order.total_amount,
        live_total,
        lines,
        order: order.clone(),
    }
}

/// Order history, oldest first, as the history page shows it.
pub fn order_views(state: &ShopState) -> Vec<OrderView> {
    state.orders.iter().map(|o| order_view(state, o)).collect()
}

pub fn list_orders(state: &ShopState, query: &OrderListQuery) -> (Vec<OrderView>, i64) {
    let mut views: Vec<OrderView> = state
        .orders
        .iter()
        .filter(|o| query.status.is_none_or(|status| o.status == status))
        .map(|o| order_view(state, o))
        .collect();
    if let Some(SortOrder::Desc) = query.sort_order {
        views.reverse();
    }
    let total = views.len() as i64;

    let (skip, take) = query.pagination().window();
    let page = views
        .into_iter()
        .skip(skip)
        .take(take)
        .collect();
    (page, total)
}

pub fn get_order(state: &ShopState, id: i64) -> AppResult<OrderView> {
    state
        .orders
        .iter()
        .find(|o| o.id == id)
        .map(|o| order_view(state, o))
        .ok_or(AppError::NotFound)
}
