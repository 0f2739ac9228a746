#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use local_storefront::{
    models::Product, render::RecordingRenderer, store::MemoryStore, storefront::Storefront,
};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
}

pub struct Harness {
    pub shop: Storefront,
    pub store: Arc<MemoryStore>,
    pub renderer: RecordingRenderer,
}

/// Sample catalog, empty in-memory store, frozen clock.
pub fn harness() -> Harness {
    harness_with(None, Arc::new(MemoryStore::new()))
}

pub fn harness_with(catalog: Option<Vec<Product>>, store: Arc<MemoryStore>) -> Harness {
    let renderer = RecordingRenderer::new();
    let shop = match catalog {
        Some(products) => Storefront::with_catalog(products, store.clone(), renderer.clone()),
        None => Storefront::open(store.clone(), renderer.clone()),
    }
    .with_clock(fixed_now);
    Harness {
        shop,
        store,
        renderer,
    }
}

pub fn product(id: i64, name: &str, price: i64, stock: u32) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        image_url: format!("https://via.placeholder.com/300x200?text={id}"),
        category: "Testing".to_string(),
        description: format!("{name} for tests"),
        stock,
    }
}
