use anyhow::Context;
use chrono::NaiveDate;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// Directory of the loaded config file; relative data paths resolve here
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub dir: String,
    /// Order status kept in the sales dataset; empty string keeps all orders
    #[serde(default = "default_status_filter")]
    pub status_filter: String,
    #[serde(default = "default_orders_file")]
    pub orders_file: String,
    #[serde(default = "default_order_items_file")]
    pub order_items_file: String,
    #[serde(default = "default_products_file")]
    pub products_file: String,
    #[serde(default = "default_customers_file")]
    pub customers_file: String,
    #[serde(default = "default_reviews_file")]
    pub reviews_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// Number of categories in the "top categories" chart
    pub top_categories: usize,
    pub default_start_date: NaiveDate,
    pub default_end_date: NaiveDate,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_categories: 10,
            default_start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            default_end_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap_or_default(),
        }
    }
}

fn default_status_filter() -> String {
    "delivered".into()
}
fn default_orders_file() -> String {
    "orders_dataset.csv".into()
}
fn default_order_items_file() -> String {
    "order_items_dataset.csv".into()
}
fn default_products_file() -> String {
    "products_dataset.csv".into()
}
fn default_customers_file() -> String {
    "customers_dataset.csv".into()
}
fn default_reviews_file() -> String {
    "order_reviews_dataset.csv".into()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[data]
dir = "ecommerce_data"
status_filter = "delivered"

[server]
host = "0.0.0.0"
port = 3000

[dashboard]
top_categories = 10
default_start_date = "2023-01-01"
default_end_date = "2023-12-31"
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Current working directory
/// 2. Next to the executable
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    let mut candidates = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("config.toml"));
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join("config.toml"));
        }
    }

    for config_path in candidates {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            return load_config_file(&config_path);
        }
        tracing::debug!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

pub fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&contents)?;
    config.base_dir = path.parent().map(Path::to_path_buf);
    Ok(config)
}

/// Publish the loaded configuration for request handlers
pub fn set_config(config: Config) -> anyhow::Result<&'static Config> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("configuration is already set"))?;
    get_config()
}

pub fn get_config() -> anyhow::Result<&'static Config> {
    CONFIG.get().context("configuration has not been loaded")
}

/// Resolve the data directory. Relative paths are taken relative to the
/// config file, or to the current directory for the embedded default.
pub fn get_data_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.data.dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    match &config.base_dir {
        Some(base) => base.join(dir),
        None => PathBuf::from(dir),
    }
}
