use crate::{
    dto::cart::{CartLine, CartSummary},
    error::{AppError, AppResult},
    models::CartEntry,
    state::ShopState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    Added(CartEntry),
    Updated(CartEntry),
    Removed(i64),
    Unchanged,
}

/// Adds one unit of `product_id`, creating the entry on first add.
pub fn add_to_cart(state: &mut ShopState, product_id: i64) -> AppResult<CartChange> {
    let product = state
        .product(product_id)
        .ok_or(AppError::ProductNotFound(product_id))?;
    if product.stock == 0 {
        return Err(AppError::SoldOut(product.name.clone()));
    }
    let (name, stock) = (product.name.clone(), product.stock);

    match state.cart.iter_mut().find(|e| e.product_id == product_id) {
        Some(entry) => {
            if entry.quantity >= stock {
                return Err(AppError::InsufficientStock {
                    name,
                    available: stock,
                });
            }
            entry.quantity += 1;
            Ok(CartChange::Updated(entry.clone()))
        }
        None => {
            let entry = CartEntry {
                product_id,
                quantity: 1,
            };
            state.cart.push(entry.clone());
            Ok(CartChange::Added(entry))
        }
    }
}

/// Applies `delta` to an existing entry. Dropping to zero or below removes it.
pub fn update_quantity(
    state: &mut ShopState,
    product_id: i64,
    delta: i64,
) -> AppResult<CartChange> {
    let Some(current) = state.cart_entry(product_id).map(|e| e.quantity) else {
        return Ok(CartChange::Unchanged);
    };

    let next = i64::from(current).saturating_add(delta);
    if next <= 0 {
        return Ok(remove_from_cart(state, product_id));
    }

    let product = state
        .product(product_id)
        .ok_or(AppError::ProductNotFound(product_id))?;
    if next > i64::from(product.stock) {
        return Err(AppError::InsufficientStock {
            name: product.name.clone(),
            available: product.stock,
        });
    }

    let quantity =
        u32::try_from(next).map_err(|_| AppError::BadRequest("quantity too large".into()))?;
    match state.cart.iter_mut().find(|e| e.product_id == product_id) {
        Some(entry) => {
            entry.quantity = quantity;
            Ok(CartChange::Updated(entry.clone()))
        }
        None => Ok(CartChange::Unchanged),
    }
}

pub fn remove_from_cart(state: &mut ShopState, product_id: i64) -> CartChange {
    let before = state.cart.len();
    state.cart.retain(|e| e.product_id != product_id);
    if state.cart.len() == before {
        CartChange::Unchanged
    } else {
        CartChange::Removed(product_id)
    }
}

pub fn cart_summary(state: &ShopState) -> CartSummary {
    let items: Vec<CartLine> = state
        .cart
        .iter()
        .filter_map(|entry| {
            let product = state.product(entry.product_id)?;
            Some(CartLine {
                line_total: product.price * i64::from(entry.quantity),
                product: product.clone(),
                quantity: entry.quantity,
            })
        })
        .collect();

    CartSummary {
        count: state.cart_count(),
        total_amount: state.price_of(&state.cart),
        items,
    }
}
