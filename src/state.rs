use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    models::{CartEntry, Order, Product, User},
    store::PersistedState,
    storefront::Storefront,
};

/// Everything the storefront knows. Services take it by `&mut` and never
/// touch storage or the UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShopState {
    pub products: Vec<Product>,
    pub cart: Vec<CartEntry>,
    pub user: Option<User>,
    pub orders: Vec<Order>,
}

impl ShopState {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    pub fn with_persisted(products: Vec<Product>, persisted: PersistedState) -> Self {
        Self {
            products,
            cart: persisted.cart,
            user: persisted.user,
            orders: persisted.orders,
        }
    }

    pub fn persisted(&self) -> PersistedState {
        PersistedState {
            cart: self.cart.clone(),
            user: self.user.clone(),
            orders: self.orders.clone(),
        }
    }

    pub fn product(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn cart_entry(&self, product_id: i64) -> Option<&CartEntry> {
        self.cart.iter().find(|e| e.product_id == product_id)
    }

    /// Number shown on the cart badge.
    pub fn cart_count(&self) -> u32 {
        self.cart.iter().map(|e| e.quantity).sum()
    }

    /// Sum of live price × quantity. Entries for unknown products count as zero.
    pub fn price_of(&self, items: &[CartEntry]) -> i64 {
        items
            .iter()
            .map(|item| {
                self.product(item.product_id)
                    .map_or(0, |p| p.price * i64::from(item.quantity))
            })
            .sum()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub shop: Arc<Mutex<Storefront>>,
}

impl AppState {
    pub fn new(storefront: Storefront) -> Self {
        Self {
            shop: Arc::new(Mutex::new(storefront)),
        }
    }
}
