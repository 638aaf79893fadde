//! Workspace umbrella crate for wordstat.
//!
//! Stitches acquisition, tokenization and statistics together so callers can
//! turn a request (inline text, a URL or an uploaded file) into an
//! [`AnalysisResult`] with a single call.
//!
//! ```text
//! WordCountRequest / UploadedFile
//!   → TextSource (validated)
//!   → resolve via ContentFetcher      (async; the only suspension point)
//!   → tokenize + aggregate            (spawn_blocking)
//!   → AnalysisResult
//! ```
//!
//! ```
//! let result = wordstat::analyze_text("Hello world & good morning. The date is 18/05/2016").unwrap();
//! assert_eq!(result.word_count, 9);
//! assert_eq!(result.most_frequent_lengths.len(), 2);
//! ```

mod error;
mod metrics;
mod result;
mod stage;

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn, Instrument};

pub use canonical::{is_delimiter, tokenize, words, Token, DELIMITERS};
pub use ingest::{
    ConfigError, ContentFetcher, ContentStore, HttpContentFetcher, IngestConfig, IngestError,
    Provenance, ResolvedText, TextSource, UploadedFile, WordCountRequest,
};
pub use stats::{LengthFrequency, StatsError, WordStatistics, WordTally};

pub use crate::error::{FailureKind, PipelineError};
pub use crate::metrics::{set_pipeline_metrics, PipelineMetrics};
pub use crate::result::AnalysisResult;
pub use crate::stage::PipelineStage;

use crate::metrics::MetricsSpan;
use crate::stage::StageTracker;

/// Runs requests through resolve → tokenize → aggregate.
///
/// Cheap to clone; clones share the fetcher.
#[derive(Clone)]
pub struct WordCounter {
    fetcher: Arc<dyn ContentFetcher>,
}

impl std::fmt::Debug for WordCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordCounter").finish_non_exhaustive()
    }
}

impl WordCounter {
    pub fn new(fetcher: Arc<dyn ContentFetcher>) -> Self {
        Self { fetcher }
    }

    /// Counter backed by an [`HttpContentFetcher`] built from `config`.
    pub fn from_config(config: &IngestConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(Arc::new(HttpContentFetcher::new(config)?)))
    }

    /// Analyzes a JSON request carrying `text` or `url`.
    pub async fn analyze(&self, request: WordCountRequest) -> Result<AnalysisResult, PipelineError> {
        let mut tracker = StageTracker::new();
        tracker.advance(PipelineStage::Resolving);
        match TextSource::from_request(request) {
            Ok(source) => self.run(source, tracker).await,
            Err(err) => Err(reject(err, &mut tracker)),
        }
    }

    /// Analyzes an uploaded file.
    pub async fn analyze_upload(
        &self,
        upload: Option<UploadedFile>,
    ) -> Result<AnalysisResult, PipelineError> {
        let mut tracker = StageTracker::new();
        tracker.advance(PipelineStage::Resolving);
        match TextSource::from_upload(upload) {
            Ok(source) => self.run(source, tracker).await,
            Err(err) => Err(reject(err, &mut tracker)),
        }
    }

    /// Analyzes an already validated source.
    pub async fn analyze_source(&self, source: TextSource) -> Result<AnalysisResult, PipelineError> {
        let mut tracker = StageTracker::new();
        tracker.advance(PipelineStage::Resolving);
        self.run(source, tracker).await
    }

    async fn run(
        &self,
        source: TextSource,
        mut tracker: StageTracker,
    ) -> Result<AnalysisResult, PipelineError> {
        let start = Instant::now();
        let kind = source.kind();
        let span = tracing::info_span!("wordstat.analyze", source = kind);

        async move {
            if source.needs_fetch() {
                tracker.advance(PipelineStage::Fetching);
            }

            let acquire_metrics = MetricsSpan::start();
            let resolved = match ingest::resolve(source, self.fetcher.as_ref()).await {
                Ok(resolved) => {
                    if let Some(span) = acquire_metrics {
                        span.record_acquire(kind, Ok(()));
                    }
                    resolved
                }
                Err(err) => {
                    if let Some(span) = acquire_metrics {
                        span.record_acquire(kind, Err(err.clone()));
                    }
                    let err = PipelineError::Ingest(err);
                    tracker.fail(err.kind());
                    warn!(error = %err, kind = %err.kind(), "analyze_failure");
                    return Err(err);
                }
            };

            let ResolvedText { text, provenance } = resolved;
            let analyze_metrics = MetricsSpan::start();
            let checkpoint = tracker.clone();
            let outcome = tokio::task::spawn_blocking(move || {
                let stats = compute(&text, &mut tracker);
                (text, stats, tracker)
            })
            .await;

            let (text, stats, mut tracker) = match outcome {
                Ok(parts) => parts,
                Err(join_err) => {
                    let err = PipelineError::Processing(join_err.to_string());
                    if let Some(span) = analyze_metrics {
                        span.record_analyze(Err(err.clone()));
                    }
                    let mut tracker = checkpoint;
                    tracker.fail(err.kind());
                    warn!(
                        stage = tracker.stage().name(),
                        error = %err,
                        kind = %err.kind(),
                        elapsed_micros = start.elapsed().as_micros(),
                        "analyze_failure"
                    );
                    return Err(err);
                }
            };

            match stats {
                Ok(stats) => {
                    if let Some(span) = analyze_metrics {
                        span.record_analyze(Ok(()));
                    }
                    tracker.advance(PipelineStage::Completed);
                    let result = AnalysisResult::assemble(text, provenance, stats);
                    info!(
                        stage = tracker.stage().name(),
                        word_count = result.word_count,
                        distinct_lengths = result.grouped_counts.len(),
                        elapsed_micros = start.elapsed().as_micros(),
                        "analyze_success"
                    );
                    Ok(result)
                }
                Err(err) => {
                    let err = PipelineError::Stats(err);
                    if let Some(span) = analyze_metrics {
                        span.record_analyze(Err(err.clone()));
                    }
                    tracker.fail(err.kind());
                    warn!(
                        stage = tracker.stage().name(),
                        error = %err,
                        kind = %err.kind(),
                        elapsed_micros = start.elapsed().as_micros(),
                        "analyze_failure"
                    );
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }
}

fn reject(err: IngestError, tracker: &mut StageTracker) -> PipelineError {
    let err = PipelineError::Ingest(err);
    tracker.fail(err.kind());
    warn!(error = %err, kind = %err.kind(), "analyze_failure");
    err
}

/// Tokenizes then aggregates, advancing `tracker` through both stages.
fn compute(text: &str, tracker: &mut StageTracker) -> Result<WordStatistics, StatsError> {
    tracker.advance(PipelineStage::Tokenizing);
    let tokens: Vec<&str> = canonical::words(text).collect();
    debug!(tokens = tokens.len(), "tokenized");

    tracker.advance(PipelineStage::Aggregating);
    stats::analyze(tokens)
}

/// Synchronous analysis of inline text, no runtime required.
pub fn analyze_text(text: &str) -> Result<AnalysisResult, PipelineError> {
    let mut tracker = StageTracker::new();
    tracker.advance(PipelineStage::Resolving);
    if text.is_empty() {
        return Err(reject(IngestError::InvalidRequest, &mut tracker));
    }

    let analyze_metrics = MetricsSpan::start();
    match compute(text, &mut tracker) {
        Ok(stats) => {
            if let Some(span) = analyze_metrics {
                span.record_analyze(Ok(()));
            }
            tracker.advance(PipelineStage::Completed);
            Ok(AnalysisResult::assemble(
                text.to_owned(),
                Provenance::Inline,
                stats,
            ))
        }
        Err(err) => {
            let err = PipelineError::Stats(err);
            if let Some(span) = analyze_metrics {
                span.record_analyze(Err(err.clone()));
            }
            tracker.fail(err.kind());
            Err(err)
        }
    }
}
