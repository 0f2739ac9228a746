use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_STORAGE_KEY: &str = "shopping_platform_data";
pub const DEFAULT_CURRENCY: &str = "¥";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub currency: String,
    pub export_dir: PathBuf,
    pub notice_ttl: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let data_dir = env::var("STOREFRONT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));
        let storage_key = env::var("STOREFRONT_STORAGE_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        if storage_key.contains(['/', '\\']) {
            anyhow::bail!("STOREFRONT_STORAGE_KEY must not contain path separators");
        }
        let currency =
            env::var("STOREFRONT_CURRENCY").unwrap_or_else(|_| DEFAULT_CURRENCY.to_string());
        let export_dir = env::var("STOREFRONT_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("exports"));
        let notice_ttl = env::var("STOREFRONT_NOTICE_TTL_MS")
            .ok()
            .and_then(|ms| ms.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_secs(3));
        Ok(Self {
            host,
            port,
            data_dir,
            storage_key,
            currency,
            export_dir,
            notice_ttl,
        })
    }
}
