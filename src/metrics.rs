//! Process-global metrics observer for pipeline stages.
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

use ingest::IngestError;

use crate::error::PipelineError;

/// Metrics observer for pipeline stages.
pub trait PipelineMetrics: Send + Sync {
    /// Called once per resolved (or failed) source. `source` is
    /// `"inline"`, `"remote"` or `"uploaded"`.
    fn record_acquire(&self, source: &'static str, latency: Duration, result: Result<(), IngestError>);

    /// Called once per tokenize + aggregate run.
    fn record_analyze(&self, latency: Duration, result: Result<(), PipelineError>);
}

/// Install or clear the global pipeline metrics recorder.
pub fn set_pipeline_metrics(recorder: Option<Arc<dyn PipelineMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PipelineMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn PipelineMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn PipelineMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Times one stage and reports to the recorder installed when it started.
pub(crate) struct MetricsSpan {
    recorder: Arc<dyn PipelineMetrics>,
    start: Instant,
}

impl MetricsSpan {
    pub(crate) fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    pub(crate) fn record_acquire(self, source: &'static str, result: Result<(), IngestError>) {
        self.recorder
            .record_acquire(source, self.start.elapsed(), result);
    }

    pub(crate) fn record_analyze(self, result: Result<(), PipelineError>) {
        self.recorder.record_analyze(self.start.elapsed(), result);
    }
}
