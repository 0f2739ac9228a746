//! Adapter between UI actions and the pure services.
//!
//! Each action runs the matching service against [`ShopState`]. A rejected
//! action raises an alert and leaves state alone. An accepted mutation is
//! written to the [`StateStore`], then the [`RenderPort`] is told what to
//! refresh. Storage failures are logged and never surface to the shopper.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::{
    audit::log_audit,
    catalog::sample_products,
    config::DEFAULT_CURRENCY,
    dto::{
        admin::{AdminStats, ExportSnapshot},
        auth::{LoginRequest, RegisterRequest},
        cart::CartSummary,
        orders::OrderView,
    },
    error::{AppError, AppResult},
    models::{CartEntry, Order, Product, User},
    render::{Page, RenderPort},
    services::{
        admin_service, auth_service,
        cart_service::{self, CartChange},
        order_service, product_service,
    },
    state::ShopState,
    store::{PersistedState, StateStore},
};

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send>;

/// Result of an accepted action plus the confirmation shown to the shopper.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied<T> {
    pub value: T,
    pub notice: String,
}

impl<T> Applied<T> {
    fn new(value: T, notice: impl Into<String>) -> Self {
        Self {
            value,
            notice: notice.into(),
        }
    }
}

pub struct Storefront {
    state: ShopState,
    store: Box<dyn StateStore>,
    renderer: Box<dyn RenderPort>,
    currency: String,
    clock: Clock,
}

impl Storefront {
    /// Builds the sample catalog, restores cart/user/orders from `store` and
    /// paints the cart badge and user status.
    pub fn open(store: impl StateStore + 'static, renderer: impl RenderPort + 'static) -> Self {
        Self::with_catalog(sample_products(), store, renderer)
    }

    pub fn with_catalog(
        products: Vec<Product>,
        store: impl StateStore + 'static,
        renderer: impl RenderPort + 'static,
    ) -> Self {
        let persisted = load_persisted(&store);
        let mut shop = Self {
            state: ShopState::with_persisted(products, persisted),
            store: Box::new(store),
            renderer: Box::new(renderer),
            currency: DEFAULT_CURRENCY.to_string(),
            clock: Box::new(Utc::now),
        };
        tracing::info!(
            products = shop.state.products.len(),
            cart_entries = shop.state.cart.len(),
            orders = shop.state.orders.len(),
            "storefront ready"
        );
        shop.refresh_cart_count();
        shop.refresh_user_status();
        shop
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn state(&self) -> &ShopState {
        &self.state
    }

    pub fn format_price(&self, amount: i64) -> String {
        format!("{}{}", self.currency, amount)
    }

    pub fn add_to_cart(&mut self, product_id: i64) -> AppResult<Applied<CartEntry>> {
        let entry = match cart_service::add_to_cart(&mut self.state, product_id) {
            Ok(CartChange::Added(entry) | CartChange::Updated(entry)) => entry,
            Ok(other) => {
                return Err(AppError::Internal(anyhow::anyhow!(
                    "unexpected cart change on add: {other:?}"
                )));
            }
            Err(err) => return self.reject(err),
        };
        let name = self
            .state
            .product(product_id)
            .map(|p| p.name.clone())
            .unwrap_or_default();

        self.persist();
        self.refresh_cart_count();
        let notice = format!("Added {name} to cart");
        self.renderer.toast(&notice);
        self.audit(
            "cart_add",
            json!({ "product_id": product_id, "quantity": entry.quantity }),
        );
        tracing::debug!(product = %name, quantity = entry.quantity, "added to cart");
        Ok(Applied::new(entry, notice))
    }

    /// `Ok(None)` value means the entry is gone, either removed or never there.
    pub fn update_quantity(
        &mut self,
        product_id: i64,
        delta: i64,
    ) -> AppResult<Applied<Option<CartEntry>>> {
        match cart_service::update_quantity(&mut self.state, product_id, delta) {
            Ok(CartChange::Unchanged) => Ok(Applied::new(None, "Item not in cart")),
            Ok(CartChange::Removed(_)) => {
                self.after_removal(product_id);
                Ok(Applied::new(None, "Removed from cart"))
            }
            Ok(CartChange::Added(entry) | CartChange::Updated(entry)) => {
                self.persist();
                self.refresh_cart_count();
                self.renderer.render(Page::Cart);
                self.audit(
                    "cart_update",
                    json!({ "product_id": product_id, "quantity": entry.quantity }),
                );
                Ok(Applied::new(Some(entry), "Cart updated"))
            }
            Err(err) => self.reject(err),
        }
    }

    pub fn remove_from_cart(&mut self, product_id: i64) -> Applied<()> {
        cart_service::remove_from_cart(&mut self.state, product_id);
        self.after_removal(product_id);
        Applied::new((), "Removed from cart")
    }

    fn after_removal(&mut self, product_id: i64) {
        self.persist();
        self.refresh_cart_count();
        self.renderer.render(Page::Cart);
        self.audit("cart_remove", json!({ "product_id": product_id }));
    }

    pub fn checkout(&mut self) -> AppResult<Applied<Order>> {
        let now = (self.clock)();
        let order = match order_service::checkout(&mut self.state, now) {
            Ok(order) => order,
            Err(err) => return self.reject(err),
        };

        self.persist();
        self.refresh_cart_count();
        let notice = format!(
            "Order placed! Order number: {}, total: {}",
            order.id,
            self.format_price(order.total_amount)
        );
        self.renderer.alert(&notice);
        self.audit(
            "checkout",
            json!({ "order_id": order.id, "total_amount": order.total_amount }),
        );
        tracing::info!(order_id = order.id, total = order.total_amount, "order created");
        self.navigate(Page::Orders);
        Ok(Applied::new(order, notice))
    }

    pub fn login(&mut self, email: &str, password: &str) -> AppResult<Applied<User>> {
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        match auth_service::login_user(&mut self.state, payload) {
            Ok(user) => Ok(self.after_sign_in(user, "user_login", "Signed in")),
            Err(err) => self.reject(err),
        }
    }

    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AppResult<Applied<User>> {
        let payload = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let now = (self.clock)();
        match auth_service::register_user(&mut self.state, payload, now) {
            Ok(user) => Ok(self.after_sign_in(user, "user_register", "Registered")),
            Err(err) => self.reject(err),
        }
    }

    fn after_sign_in(&mut self, user: User, action: &str, notice: &str) -> Applied<User> {
        self.persist();
        self.refresh_user_status();
        self.renderer.render(Page::Login);
        self.renderer.toast(notice);
        self.audit(action, json!({ "user_id": user.id }));
        Applied::new(user, notice)
    }

    pub fn logout(&mut self) -> Applied<()> {
        let previous = auth_service::logout_user(&mut self.state);
        self.persist();
        self.refresh_user_status();
        self.renderer.render(Page::Login);
        self.renderer.toast("Signed out");
        log_audit(
            previous.map(|u| u.id),
            "user_logout",
            Some("session"),
            None,
        );
        Applied::new((), "Signed out")
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn search(&self, term: &str) -> Vec<Product> {
        product_service::search_products(&self.state, term)
    }

    pub fn featured_products(&self) -> Vec<Product> {
        product_service::featured_products(&self.state)
    }

    pub fn cart_count(&self) -> u32 {
        self.state.cart_count()
    }

    pub fn cart_summary(&self) -> CartSummary {
        cart_service::cart_summary(&self.state)
    }

    pub fn order_views(&self) -> Vec<OrderView> {
        order_service::order_views(&self.state)
    }

    pub fn admin_stats(&self) -> AdminStats {
        admin_service::stats(&self.state)
    }

    pub fn export_data(&mut self) -> ExportSnapshot {
        let snapshot = admin_service::export_snapshot(&self.state, (self.clock)());
        self.renderer.toast("Data exported");
        tracing::info!(
            file = %snapshot.file_name(),
            orders = snapshot.orders.len(),
            "export prepared"
        );
        snapshot
    }

    /// Erases the stored blob and the in-memory cart and orders. Nothing
    /// happens unless `confirmed` is set.
    pub fn clear_all_data(&mut self, confirmed: bool) -> AppResult<Applied<()>> {
        if !confirmed {
            return self.reject(AppError::ConfirmationRequired);
        }

        admin_service::clear_all(&mut self.state);
        if let Err(err) = self.store.clear() {
            tracing::error!(error = %err, "failed to erase stored state");
        }
        self.refresh_cart_count();
        self.renderer.render(Page::Admin);
        self.renderer.toast("All data cleared");
        self.audit("clear_all", json!({}));
        Ok(Applied::new((), "All data cleared"))
    }

    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(page = page.as_str(), "navigate");
        self.renderer.render(page);
    }

    fn reject<T>(&mut self, err: AppError) -> AppResult<T> {
        if err.is_user_error() {
            self.renderer.alert(&err.to_string());
        }
        Err(err)
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.state.persisted()) {
            tracing::error!(error = %err, "failed to persist storefront state");
        }
    }

    fn refresh_cart_count(&mut self) {
        let count = self.state.cart_count();
        self.renderer.cart_count(count);
    }

    fn refresh_user_status(&mut self) {
        self.renderer.user_status(self.state.user.as_ref());
    }

    fn audit(&self, action: &str, metadata: serde_json::Value) {
        log_audit(
            self.state.user.as_ref().map(|u| u.id),
            action,
            Some("storefront"),
            Some(metadata),
        );
    }
}

fn load_persisted(store: &dyn StateStore) -> PersistedState {
    match store.load() {
        Ok(Some(state)) => {
            tracing::info!("stored state loaded");
            state
        }
        Ok(None) => PersistedState::default(),
        Err(err) => {
            tracing::error!(error = %err, "failed to load stored state, starting empty");
            PersistedState::default()
        }
    }
}
