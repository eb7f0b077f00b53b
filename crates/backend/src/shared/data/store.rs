use anyhow::Context;
use contracts::enums::order_status::OrderStatus;
use once_cell::sync::OnceCell;

use super::loader::{CsvSalesSource, SalesSource};
use crate::shared::config::{get_data_dir, Config};
use crate::shared::metrics::SalesDataset;

static STORE: OnceCell<DataStore> = OnceCell::new();

/// Tables loaded at startup plus the sales dataset built from them.
/// Read-only for the lifetime of the process.
pub struct DataStore {
    source: Box<dyn SalesSource + Send + Sync>,
    sales: SalesDataset,
    status_filter: Option<OrderStatus>,
}

impl DataStore {
    pub fn new(
        source: Box<dyn SalesSource + Send + Sync>,
        status_filter: Option<OrderStatus>,
    ) -> anyhow::Result<Self> {
        let sales = source
            .create_sales_dataset(status_filter)
            .context("failed to build sales dataset")?;
        Ok(Self {
            source,
            sales,
            status_filter,
        })
    }

    pub fn source(&self) -> &dyn SalesSource {
        self.source.as_ref()
    }

    /// Line items of orders matching the configured status
    pub fn sales(&self) -> &SalesDataset {
        &self.sales
    }

    pub fn status_filter(&self) -> Option<OrderStatus> {
        self.status_filter
    }
}

/// Parse the configured status filter; an empty value disables filtering
pub fn parse_status_filter(raw: &str) -> anyhow::Result<Option<OrderStatus>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    OrderStatus::from_code(raw)
        .map(Some)
        .with_context(|| format!("unknown order status in config: {raw:?}"))
}

/// Load the CSV tables configured in `config` and publish them
pub fn initialize_store(config: &Config) -> anyhow::Result<()> {
    let dir = get_data_dir(config);
    let status_filter = parse_status_filter(&config.data.status_filter)?;

    let source = CsvSalesSource::load(&dir, &config.data)
        .with_context(|| format!("failed to load data from {}", dir.display()))?;
    let store = DataStore::new(Box::new(source), status_filter)?;

    tracing::info!(
        records = store.sales().len(),
        years = ?store.sales().years(),
        status = ?store.status_filter(),
        "Sales dataset ready"
    );

    STORE
        .set(store)
        .map_err(|_| anyhow::anyhow!("data store is already initialized"))
}

pub fn get_store() -> anyhow::Result<&'static DataStore> {
    STORE
        .get()
        .context("data store has not been initialized")
}
