use crate::config::ServerConfig;
use crate::error::ServerResult;
use ingest::HttpContentFetcher;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::Arc;
use wordstat::WordCounter;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Pipeline entry point (shared across requests)
    pub counter: WordCounter,

    /// Content store directory, checked by the readiness probe
    pub store_root: Option<PathBuf>,

    /// Prometheus render handle, when the exporter is installed
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state with an HTTP fetcher built from `config.ingest`
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let fetcher = HttpContentFetcher::new(&config.ingest)?;
        let store_root = fetcher.store_handle().root().to_path_buf();

        Ok(Self {
            config: Arc::new(config),
            counter: WordCounter::new(Arc::new(fetcher)),
            store_root: Some(store_root),
            metrics: None,
        })
    }

    /// State around an existing counter
    pub fn with_counter(config: ServerConfig, counter: WordCounter) -> Self {
        Self {
            config: Arc::new(config),
            counter,
            store_root: None,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Whether the content store is usable
    pub fn store_ready(&self) -> bool {
        match &self.store_root {
            Some(root) => root.is_dir(),
            None => true,
        }
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
}
