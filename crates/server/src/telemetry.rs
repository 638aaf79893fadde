//! Prometheus wiring for pipeline and HTTP metrics.
use std::sync::Arc;
use std::time::Duration;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use wordstat::{IngestError, PipelineError, PipelineMetrics};

/// Feeds pipeline stage outcomes into the `metrics` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrometheusPipelineMetrics;

impl PipelineMetrics for PrometheusPipelineMetrics {
    fn record_acquire(
        &self,
        source: &'static str,
        latency: Duration,
        result: Result<(), IngestError>,
    ) {
        let outcome = if result.is_ok() { "ok" } else { "error" };
        metrics::counter!("wordstat_acquire_total", "source" => source, "outcome" => outcome)
            .increment(1);
        metrics::histogram!("wordstat_acquire_seconds", "source" => source)
            .record(latency.as_secs_f64());
    }

    fn record_analyze(&self, latency: Duration, result: Result<(), PipelineError>) {
        let outcome = match &result {
            Ok(()) => "ok",
            Err(err) => err.kind().as_str(),
        };
        metrics::counter!("wordstat_analyze_total", "outcome" => outcome).increment(1);
        metrics::histogram!("wordstat_analyze_seconds").record(latency.as_secs_f64());
    }
}

/// Installs the global Prometheus recorder and the pipeline observer.
///
/// Call at most once per process.
pub fn install() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    wordstat::set_pipeline_metrics(Some(Arc::new(PrometheusPipelineMetrics)));
    Ok(handle)
}

/// Counts one finished HTTP request.
pub fn record_request(method: &str, status: u16, latency: Duration) {
    metrics::counter!(
        "wordstat_http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("wordstat_http_request_seconds").record(latency.as_secs_f64());
}
