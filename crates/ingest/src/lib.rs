//! Wordstat ingest layer
//!
//! This is where text enters the wordstat pipeline. A request names exactly
//! one origin (inline text, a URL or an uploaded file) and we hand back the
//! text plus where it came from.
//!
//! ## What we do here
//!
//! - **Validate requests** - Text beats URL, empty strings count as absent,
//!   and a request with neither is rejected before any I/O.
//! - **Fetch URLs** - Over `reqwest` with configurable timeouts and a payload
//!   ceiling. Every network, status or decode problem becomes a typed
//!   [`IngestError::FetchFailure`] naming the URL.
//! - **Store uploads** - Uploaded bytes are buffered under a unique name in a
//!   [`ContentStore`] and read back as UTF-8.
//! - **Log everything** - Structured `ingest_success` / `ingest_failure`
//!   events with elapsed time, via `tracing`.
//!
//! ## Main entry point
//!
//! Build a [`TextSource`] and call [`resolve`] with any [`ContentFetcher`].
//! [`resolve_request`] and [`resolve_upload`] do the validation step for you.
//!
//! ## Example
//!
//! ```no_run
//! use ingest::{resolve_request, HttpContentFetcher, IngestConfig, WordCountRequest};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = HttpContentFetcher::new(&IngestConfig::default())?;
//! let resolved = resolve_request(WordCountRequest::text("thy brother's blood"), &fetcher).await?;
//! assert_eq!(resolved.text, "thy brother's blood");
//! # Ok(())
//! # }
//! ```
use std::time::Instant;

use tracing::{info, warn, Instrument};

mod config;
mod error;
mod fetcher;
mod sanitize;
mod store;
mod types;

pub use crate::config::{ConfigError, IngestConfig};
pub use crate::error::IngestError;
pub use crate::fetcher::{ContentFetcher, HttpContentFetcher};
pub use crate::store::ContentStore;
pub use crate::types::{
    Provenance, ResolvedText, TextSource, UploadedFile, WordCountRequest,
};

/// Resolves a source to text.
///
/// Inline text returns immediately. Remote and uploaded sources go through
/// `fetcher`; whatever it returns is normalized to the matching error kind.
pub async fn resolve(
    source: TextSource,
    fetcher: &dyn ContentFetcher,
) -> Result<ResolvedText, IngestError> {
    let start = Instant::now();
    let kind = source.kind();
    let span = tracing::info_span!("ingest.resolve", source = kind);

    async move {
        match resolve_inner(source, fetcher).await {
            Ok(resolved) => {
                let elapsed_micros = start.elapsed().as_micros();
                info!(
                    provenance = ?resolved.provenance,
                    text_len = resolved.text.len(),
                    elapsed_micros,
                    "ingest_success"
                );
                Ok(resolved)
            }
            Err(err) => {
                let elapsed_micros = start.elapsed().as_micros();
                warn!(error = %err, elapsed_micros, "ingest_failure");
                Err(err)
            }
        }
    }
    .instrument(span)
    .await
}

async fn resolve_inner(
    source: TextSource,
    fetcher: &dyn ContentFetcher,
) -> Result<ResolvedText, IngestError> {
    match source {
        TextSource::Inline(text) => Ok(ResolvedText {
            text,
            provenance: Provenance::Inline,
        }),
        TextSource::Remote(url) => {
            let text = fetcher.fetch(&url).await.map_err(|err| match err {
                err @ IngestError::FetchFailure { .. } => err,
                other => IngestError::fetch(&url, other),
            })?;
            Ok(ResolvedText {
                text,
                provenance: Provenance::Remote { url },
            })
        }
        TextSource::Uploaded(upload) => {
            let text = fetcher.store(&upload).await.map_err(|err| match err {
                err @ IngestError::UploadFailure(_) => err,
                other => IngestError::upload(other),
            })?;
            Ok(ResolvedText {
                text,
                provenance: Provenance::Uploaded {
                    file_name: upload.sanitized_name(),
                },
            })
        }
    }
}

/// Validates a JSON request and resolves it.
pub async fn resolve_request(
    request: WordCountRequest,
    fetcher: &dyn ContentFetcher,
) -> Result<ResolvedText, IngestError> {
    let source = match TextSource::from_request(request) {
        Ok(source) => source,
        Err(err) => {
            warn!(error = %err, "ingest_failure");
            return Err(err);
        }
    };
    resolve(source, fetcher).await
}

/// Validates an upload and resolves it.
pub async fn resolve_upload(
    upload: Option<UploadedFile>,
    fetcher: &dyn ContentFetcher,
) -> Result<ResolvedText, IngestError> {
    let source = match TextSource::from_upload(upload) {
        Ok(source) => source,
        Err(err) => {
            warn!(error = %err, "ingest_failure");
            return Err(err);
        }
    };
    resolve(source, fetcher).await
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    /// Serves canned text and counts calls.
    #[derive(Default)]
    struct StubFetcher {
        fetches: AtomicUsize,
        stores: AtomicUsize,
        fail_with: Option<IngestError>,
    }

    #[async_trait]
    impl ContentFetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<String, IngestError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(format!("body of {url}")),
            }
        }

        async fn store(&self, upload: &UploadedFile) -> Result<String, IngestError> {
            self.stores.fetch_add(1, Ordering::SeqCst);
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(String::from_utf8_lossy(&upload.bytes).into_owned()),
            }
        }
    }

    #[tokio::test]
    async fn inline_text_skips_fetcher() {
        let stub = StubFetcher::default();
        let resolved = resolve_request(WordCountRequest::text("a b c"), &stub)
            .await
            .unwrap();
        assert_eq!(resolved.text, "a b c");
        assert_eq!(resolved.provenance, Provenance::Inline);
        assert_eq!(stub.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn url_goes_through_fetcher() {
        let stub = StubFetcher::default();
        let resolved = resolve_request(WordCountRequest::url("http://host/book.txt"), &stub)
            .await
            .unwrap();
        assert_eq!(resolved.text, "body of http://host/book.txt");
        assert_eq!(resolved.provenance.url(), Some("http://host/book.txt"));
        assert_eq!(stub.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalid_request_never_fetches() {
        let stub = StubFetcher::default();
        let err = resolve_request(WordCountRequest::default(), &stub)
            .await
            .unwrap_err();
        assert_eq!(err, IngestError::InvalidRequest);
        assert_eq!(stub.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn fetcher_errors_become_fetch_failures() {
        let stub = StubFetcher {
            fail_with: Some(IngestError::upload("disk full")),
            ..Default::default()
        };
        let err = resolve_request(WordCountRequest::url("http://host/x"), &stub)
            .await
            .unwrap_err();
        match err {
            IngestError::FetchFailure { url, message } => {
                assert_eq!(url, "http://host/x");
                assert!(message.contains("disk full"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn store_errors_become_upload_failures() {
        let stub = StubFetcher {
            fail_with: Some(IngestError::fetch("http://x", "boom")),
            ..Default::default()
        };
        let upload = UploadedFile::new(Some("a.txt".into()), &b"abc"[..]);
        let err = resolve_upload(Some(upload), &stub).await.unwrap_err();
        assert!(matches!(err, IngestError::UploadFailure(msg) if msg.contains("boom")));
    }

    #[tokio::test]
    async fn upload_keeps_sanitized_name() {
        let stub = StubFetcher::default();
        let upload = UploadedFile::new(Some("../secret/kingJames.txt".into()), &b"In the"[..]);
        let resolved = resolve_upload(Some(upload), &stub).await.unwrap();
        assert_eq!(resolved.text, "In the");
        assert_eq!(
            resolved.provenance,
            Provenance::Uploaded {
                file_name: Some("kingJames.txt".into())
            }
        );
        assert_eq!(stub.stores.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_upload_rejected_before_store() {
        let stub = StubFetcher::default();
        let err = resolve_upload(None, &stub).await.unwrap_err();
        assert!(matches!(err, IngestError::UploadFailure(_)));
        assert_eq!(stub.stores.load(Ordering::SeqCst), 0);
    }
}
