//! Request, source and provenance types.
//!
//! ```text
//! WordCountRequest { text?, url? }        UploadedFile?
//!            │ TextSource::from_request           │ TextSource::from_upload
//!            ▼                                    ▼
//!        TextSource::{Inline | Remote | Uploaded}
//!            │ resolve()
//!            ▼
//!        ResolvedText { text, provenance }
//! ```
//!
//! A [`TextSource`] is only ever built by the two validating constructors, so
//! a request with no usable input never gets past them.
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::IngestError;
use crate::sanitize::sanitize_file_name;

/// The loosely typed request accepted at the JSON boundary.
///
/// Unknown fields are ignored. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCountRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl WordCountRequest {
    /// Request carrying inline text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            url: None,
            text: Some(text.into()),
        }
    }

    /// Request carrying a URL to fetch.
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            text: None,
        }
    }
}

/// A file received through an upload, held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// File name as sent by the client. Untrusted.
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn new(file_name: Option<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name,
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Client file name with path components and control characters removed.
    pub fn sanitized_name(&self) -> Option<String> {
        sanitize_file_name(self.file_name.as_deref())
    }
}

/// Where the text to analyze comes from. Exactly one origin per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Inline(String),
    Remote(String),
    Uploaded(UploadedFile),
}

impl TextSource {
    /// Validates a JSON request.
    ///
    /// Non-empty text wins; otherwise a non-empty URL; otherwise
    /// [`IngestError::InvalidRequest`].
    ///
    /// ```rust
    /// use ingest::{IngestError, TextSource, WordCountRequest};
    ///
    /// let source = TextSource::from_request(WordCountRequest::text("hi")).unwrap();
    /// assert_eq!(source, TextSource::Inline("hi".into()));
    ///
    /// let err = TextSource::from_request(WordCountRequest::default()).unwrap_err();
    /// assert_eq!(err, IngestError::InvalidRequest);
    /// ```
    pub fn from_request(request: WordCountRequest) -> Result<Self, IngestError> {
        let WordCountRequest { url, text } = request;
        let url = url.filter(|u| !u.is_empty());

        match text.filter(|t| !t.is_empty()) {
            Some(text) => {
                if let Some(url) = url {
                    warn!(url = %url, "request carries both text and url; using text");
                }
                Ok(TextSource::Inline(text))
            }
            None => url.map(TextSource::Remote).ok_or(IngestError::InvalidRequest),
        }
    }

    /// Validates an upload. Absent or zero-byte files are rejected.
    pub fn from_upload(upload: Option<UploadedFile>) -> Result<Self, IngestError> {
        match upload {
            Some(file) if !file.is_empty() => Ok(TextSource::Uploaded(file)),
            _ => Err(IngestError::upload(
                "File upload to local storage has failed. No file found.",
            )),
        }
    }

    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            TextSource::Inline(_) => "inline",
            TextSource::Remote(_) => "remote",
            TextSource::Uploaded(_) => "uploaded",
        }
    }

    /// True when resolving this source suspends on I/O.
    pub fn needs_fetch(&self) -> bool {
        !matches!(self, TextSource::Inline(_))
    }
}

/// Where resolved text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Provenance {
    Inline,
    Remote { url: String },
    Uploaded { file_name: Option<String> },
}

impl Provenance {
    /// Source URL, only for remote text.
    pub fn url(&self) -> Option<&str> {
        match self {
            Provenance::Remote { url } => Some(url),
            _ => None,
        }
    }
}

/// Text ready for tokenization plus its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedText {
    pub text: String,
    pub provenance: Provenance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_takes_precedence_over_url() {
        let request = WordCountRequest {
            url: Some("https://example.com".into()),
            text: Some("inline".into()),
        };
        assert_eq!(
            TextSource::from_request(request),
            Ok(TextSource::Inline("inline".into()))
        );
    }

    #[test]
    fn empty_text_falls_back_to_url() {
        let request = WordCountRequest {
            url: Some("https://example.com/a.txt".into()),
            text: Some(String::new()),
        };
        assert_eq!(
            TextSource::from_request(request),
            Ok(TextSource::Remote("https://example.com/a.txt".into()))
        );
    }

    #[test]
    fn empty_strings_are_invalid() {
        let request = WordCountRequest {
            url: Some(String::new()),
            text: Some(String::new()),
        };
        assert_eq!(
            TextSource::from_request(request),
            Err(IngestError::InvalidRequest)
        );
    }

    #[test]
    fn whitespace_text_is_still_inline() {
        // Blank text is an analysis failure, not a request failure.
        assert_eq!(
            TextSource::from_request(WordCountRequest::text("   ")),
            Ok(TextSource::Inline("   ".into()))
        );
    }

    #[test]
    fn missing_or_empty_upload_rejected() {
        assert!(matches!(
            TextSource::from_upload(None),
            Err(IngestError::UploadFailure(_))
        ));
        let empty = UploadedFile::new(Some("empty.txt".into()), Vec::new());
        assert!(matches!(
            TextSource::from_upload(Some(empty)),
            Err(IngestError::UploadFailure(msg)) if msg.contains("No file found")
        ));
    }

    #[test]
    fn request_ignores_unknown_fields() {
        let request: WordCountRequest =
            serde_json::from_str(r#"{"text": "a b", "lang": "en"}"#).unwrap();
        assert_eq!(request, WordCountRequest::text("a b"));
    }

    #[test]
    fn provenance_url_only_for_remote() {
        assert_eq!(Provenance::Inline.url(), None);
        assert_eq!(
            Provenance::Remote {
                url: "http://x".into()
            }
            .url(),
            Some("http://x")
        );
        assert_eq!(Provenance::Uploaded { file_name: None }.url(), None);
    }
}
