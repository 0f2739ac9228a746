//! Render port: everything the state manager asks of the UI layer.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Index,
    Products,
    Cart,
    Orders,
    Login,
    Admin,
}

impl Page {
    /// Unknown names fall back to the home page.
    pub fn from_name(name: &str) -> Self {
        match name {
            "products" => Page::Products,
            "cart" => Page::Cart,
            "orders" => Page::Orders,
            "login" => Page::Login,
            "admin" => Page::Admin,
            _ => Page::Index,
        }
    }

    /// Accepts link targets such as `cart.html` or `/shop/orders.html`.
    pub fn from_path(path: &str) -> Self {
        let last = path.rsplit('/').next().unwrap_or_default();
        Self::from_name(last.strip_suffix(".html").unwrap_or(last))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Index => "index",
            Page::Products => "products",
            Page::Cart => "cart",
            Page::Orders => "orders",
            Page::Login => "login",
            Page::Admin => "admin",
        }
    }
}

pub trait RenderPort: Send {
    /// Blocking notice the shopper has to acknowledge.
    fn alert(&mut self, message: &str);
    /// Transient confirmation that dismisses itself.
    fn toast(&mut self, message: &str);
    fn cart_count(&mut self, count: u32);
    fn user_status(&mut self, user: Option<&User>);
    fn render(&mut self, page: Page);
}

/// Headless renderer used by the HTTP adapter and the CLI.
#[derive(Debug, Clone)]
pub struct LogRenderer {
    notice_ttl: Duration,
}

impl LogRenderer {
    pub fn new(notice_ttl: Duration) -> Self {
        Self { notice_ttl }
    }
}

impl RenderPort for LogRenderer {
    fn alert(&mut self, message: &str) {
        tracing::warn!(notice = message, "alert shown");
    }

    fn toast(&mut self, message: &str) {
        tracing::info!(
            notice = message,
            ttl_ms = self.notice_ttl.as_millis() as u64,
            "toast shown"
        );
    }

    fn cart_count(&mut self, count: u32) {
        tracing::debug!(count, "cart badge");
    }

    fn user_status(&mut self, user: Option<&User>) {
        match user {
            Some(user) => tracing::debug!(name = %user.name, "signed in"),
            None => tracing::debug!("signed out"),
        }
    }

    fn render(&mut self, page: Page) {
        tracing::debug!(page = page.as_str(), "render");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Alert(String),
    Toast(String),
    CartCount(u32),
    UserStatus(Option<String>),
    Render(Page),
}

/// Keeps every render call so tests can assert on what the shopper would see.
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    events: Arc<Mutex<Vec<RenderEvent>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RenderEvent::Alert(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    pub fn toasts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RenderEvent::Toast(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    pub fn last_page(&self) -> Option<Page> {
        self.events().into_iter().rev().find_map(|e| match e {
            RenderEvent::Render(page) => Some(page),
            _ => None,
        })
    }

    pub fn last_cart_count(&self) -> Option<u32> {
        self.events().into_iter().rev().find_map(|e| match e {
            RenderEvent::CartCount(count) => Some(count),
            _ => None,
        })
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    fn push(&self, event: RenderEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl RenderPort for RecordingRenderer {
    fn alert(&mut self, message: &str) {
        self.push(RenderEvent::Alert(message.to_string()));
    }

    fn toast(&mut self, message: &str) {
        self.push(RenderEvent::Toast(message.to_string()));
    }

    fn cart_count(&mut self, count: u32) {
        self.push(RenderEvent::CartCount(count));
    }

    fn user_status(&mut self, user: Option<&User>) {
        self.push(RenderEvent::UserStatus(user.map(|u| u.name.clone())));
    }

    fn render(&mut self, page: Page) {
        self.push(RenderEvent::Render(page));
    }
}
