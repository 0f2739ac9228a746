use std::fs;

use local_storefront::{
    config::AppConfig, render::LogRenderer, store::FileStore, storefront::Storefront,
};

/// Writes the catalog and order history from the stored blob to
/// `<export_dir>/shopping_platform_data_<millis>.json`.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,local_storefront=info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let store = FileStore::new(&config.data_dir, &config.storage_key);
    let mut shop = Storefront::open(store, LogRenderer::new(config.notice_ttl));

    let snapshot = shop.export_data();
    fs::create_dir_all(&config.export_dir)?;
    let path = config.export_dir.join(snapshot.file_name());
    fs::write(&path, serde_json::to_string_pretty(&snapshot)?)?;

    println!(
        "Exported {} products and {} orders to {}",
        snapshot.products.len(),
        snapshot.orders.len(),
        path.display()
    );
    Ok(())
}
