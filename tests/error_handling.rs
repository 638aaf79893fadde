use std::sync::Arc;

use async_trait::async_trait;
use wordstat::{
    analyze_text, ContentFetcher, FailureKind, IngestError, PipelineError, StatsError,
    UploadedFile, WordCountRequest, WordCounter,
};

/// Fails every acquisition with the same error.
struct FailingFetcher(IngestError);

#[async_trait]
impl ContentFetcher for FailingFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, IngestError> {
        Err(self.0.clone())
    }

    async fn store(&self, _upload: &UploadedFile) -> Result<String, IngestError> {
        Err(self.0.clone())
    }
}

fn failing(err: IngestError) -> WordCounter {
    WordCounter::new(Arc::new(FailingFetcher(err)))
}

#[tokio::test]
async fn empty_request_is_invalid() {
    let counter = failing(IngestError::fetch("unused", "unused"));
    let request = WordCountRequest {
        url: Some(String::new()),
        text: Some(String::new()),
    };

    let err = counter.analyze(request).await.unwrap_err();
    assert_eq!(err, PipelineError::Ingest(IngestError::InvalidRequest));
    assert_eq!(
        err.to_string(),
        "Cannot process this request. No text or URL to process provided"
    );
}

#[tokio::test]
async fn fetch_cause_is_kept_in_message() {
    let counter = failing(IngestError::fetch(
        "https://example.com/no/books.txt",
        "connection refused",
    ));

    let err = counter
        .analyze(WordCountRequest::url("https://example.com/no/books.txt"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::FetchFailure);
    let msg = err.to_string();
    assert!(msg.contains("[ https://example.com/no/books.txt ]"));
    assert!(msg.contains("connection refused"));
}

#[tokio::test]
async fn store_error_is_upload_failure() {
    let counter = failing(IngestError::upload("disk full"));
    let upload = UploadedFile::new(Some("a.txt".into()), &b"words"[..]);

    let err = counter.analyze_upload(Some(upload)).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::UploadFailure);
    assert!(err.to_string().contains("disk full"));
}

#[tokio::test]
async fn missing_upload_is_upload_failure() {
    let counter = failing(IngestError::upload("unused"));
    let err = counter.analyze_upload(None).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::UploadFailure);
    assert!(err.to_string().contains("No file found"));
}

#[test]
fn all_delimiter_text_never_returns_zero_words() {
    for text in ["...", "   ", "(){}[]", "¬!*+-_=|~\\^<>.?;:\"", "\n\t\r"] {
        let err = analyze_text(text).unwrap_err();
        assert_eq!(err, PipelineError::Stats(StatsError::EmptyText), "{text:?}");
    }
}

#[test]
fn empty_inline_text_is_invalid() {
    let err = analyze_text("").unwrap_err();
    assert_eq!(err.kind(), FailureKind::InvalidRequest);
}
