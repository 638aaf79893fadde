use ingest::IngestError;
use serde::Serialize;
use stats::StatsError;
use thiserror::Error;

/// The five ways a request can fail. Every failure is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    InvalidRequest,
    UploadFailure,
    FetchFailure,
    EmptyTextFailure,
    ProcessingFailure,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::InvalidRequest => "invalid_request",
            FailureKind::UploadFailure => "upload_failure",
            FailureKind::FetchFailure => "fetch_failure",
            FailureKind::EmptyTextFailure => "empty_text_failure",
            FailureKind::ProcessingFailure => "processing_failure",
        }
    }

    /// True for failures caused by what the caller sent.
    pub fn is_client_error(self) -> bool {
        matches!(self, FailureKind::InvalidRequest | FailureKind::UploadFailure)
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while running a request through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    /// Internal failure outside the stages themselves, e.g. a panicked worker.
    #[error("unexpected failure while analyzing text: {0}")]
    Processing(String),
}

impl PipelineError {
    pub fn kind(&self) -> FailureKind {
        match self {
            PipelineError::Ingest(IngestError::InvalidRequest) => FailureKind::InvalidRequest,
            PipelineError::Ingest(IngestError::UploadFailure(_)) => FailureKind::UploadFailure,
            PipelineError::Ingest(_) => FailureKind::FetchFailure,
            PipelineError::Stats(StatsError::EmptyText) => FailureKind::EmptyTextFailure,
            PipelineError::Stats(StatsError::Processing(_)) | PipelineError::Processing(_) => {
                FailureKind::ProcessingFailure
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cover_every_variant() {
        let cases = [
            (PipelineError::from(IngestError::InvalidRequest), FailureKind::InvalidRequest),
            (PipelineError::from(IngestError::upload("x")), FailureKind::UploadFailure),
            (PipelineError::from(IngestError::fetch("u", "x")), FailureKind::FetchFailure),
            (PipelineError::from(StatsError::EmptyText), FailureKind::EmptyTextFailure),
            (
                PipelineError::from(StatsError::Processing("overflow".into())),
                FailureKind::ProcessingFailure,
            ),
            (PipelineError::Processing("panic".into()), FailureKind::ProcessingFailure),
        ];
        for (err, kind) in cases {
            assert_eq!(err.kind(), kind, "{err}");
        }
    }

    #[test]
    fn ingest_messages_pass_through() {
        let err = PipelineError::from(IngestError::fetch("http://x/a.txt", "timed out"));
        assert_eq!(
            err.to_string(),
            "Failed to retrieve file from URL: [ http://x/a.txt ] with error: timed out"
        );
    }

    #[test]
    fn client_error_kinds() {
        assert!(FailureKind::InvalidRequest.is_client_error());
        assert!(FailureKind::UploadFailure.is_client_error());
        assert!(!FailureKind::EmptyTextFailure.is_client_error());
    }
}
