//! Error types produced by the ingest crate.
//!
//! Every acquisition failure is one of three kinds, and each kind carries
//! enough text to be shown to a caller as-is:
//!
//! | Error | Raised when | Suggested status |
//! |-------|-------------|------------------|
//! | [`InvalidRequest`](IngestError::InvalidRequest) | neither text nor URL given | 400 |
//! | [`UploadFailure`](IngestError::UploadFailure) | upload missing, empty, too large or unreadable | 400 |
//! | [`FetchFailure`](IngestError::FetchFailure) | network, timeout, status or decode error for a URL | 422 |
//!
//! # Examples
//!
//! ```rust
//! use ingest::IngestError;
//!
//! let err = IngestError::fetch("https://example.com/a.txt", "The connection timed out.");
//! assert!(err.to_string().contains("https://example.com/a.txt"));
//! assert!(err.to_string().contains("timed out"));
//! assert_eq!(err.http_status_code(), 422);
//! ```
use std::fmt::Display;

use thiserror::Error;

/// Errors that can occur while acquiring text for analysis.
///
/// Cloneable and comparable so tests and callers can match on them directly.
/// Marked `#[non_exhaustive]`; include a catch-all arm when matching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IngestError {
    /// The request carried neither text nor a URL.
    #[error("Cannot process this request. No text or URL to process provided")]
    InvalidRequest,

    /// The uploaded file was absent, empty, oversized or could not be read.
    #[error("Failed to retrieve uploaded file with error: {0}")]
    UploadFailure(String),

    /// Retrieving `url` failed. `message` holds the underlying cause.
    #[error("Failed to retrieve file from URL: [ {url} ] with error: {message}")]
    FetchFailure { url: String, message: String },
}

impl IngestError {
    /// Builds a [`FetchFailure`](IngestError::FetchFailure) from any cause.
    pub fn fetch(url: impl Into<String>, cause: impl Display) -> Self {
        IngestError::FetchFailure {
            url: url.into(),
            message: cause.to_string(),
        }
    }

    /// Builds an [`UploadFailure`](IngestError::UploadFailure) from any cause.
    pub fn upload(cause: impl Display) -> Self {
        IngestError::UploadFailure(cause.to_string())
    }

    /// True when the caller sent something unusable.
    ///
    /// ```rust
    /// use ingest::IngestError;
    ///
    /// assert!(IngestError::InvalidRequest.is_client_error());
    /// assert!(!IngestError::fetch("http://x", "refused").is_client_error());
    /// ```
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            IngestError::InvalidRequest | IngestError::UploadFailure(_)
        )
    }

    /// Suggested HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            IngestError::InvalidRequest | IngestError::UploadFailure(_) => 400,
            IngestError::FetchFailure { .. } => 422,
        }
    }
}
