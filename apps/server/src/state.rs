//! Shared application state

use anyhow::Context;
use medscope_analytics::DataStore;
use std::sync::Arc;

use crate::config::Config;
use crate::metrics::DatasetLoadMetrics;
use crate::services::ReportService;

/// State handed to every handler. Cloning is cheap; everything inside is
/// read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub reports: Arc<ReportService>,
}

impl AppState {
    /// Build the state, computing the network baseline from the configured
    /// data directory.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = DataStore::new(&config.data.directory).with_observer(Arc::new(DatasetLoadMetrics));

        let reports = ReportService::new(store, config.analytics.service_radius_km).with_context(|| {
            format!(
                "Failed to compute network baseline from {}",
                config.data.directory.display()
            )
        })?;

        Ok(Self {
            config: Arc::new(config),
            reports: Arc::new(reports),
        })
    }
}
