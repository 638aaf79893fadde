//! Network and upload acquisition behind the [`ContentFetcher`] seam.
//!
//! [`HttpContentFetcher`] is the production implementation: it downloads a
//! URL with `reqwest`, buffers the body in the [`ContentStore`] and reads it
//! back as UTF-8. Uploads take the same store-then-read path.
use std::error::Error as StdError;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, IngestConfig};
use crate::error::IngestError;
use crate::store::ContentStore;
use crate::types::UploadedFile;

/// Turns a URL or an upload into text.
///
/// Implementations must be shareable across concurrent requests.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Downloads `url` and decodes it as UTF-8.
    async fn fetch(&self, url: &str) -> Result<String, IngestError>;

    /// Persists `upload` and decodes it as UTF-8.
    async fn store(&self, upload: &UploadedFile) -> Result<String, IngestError>;
}

/// `reqwest`-backed fetcher with a local content store.
#[derive(Debug, Clone)]
pub struct HttpContentFetcher {
    client: reqwest::Client,
    store: ContentStore,
    max_payload_bytes: Option<usize>,
}

impl HttpContentFetcher {
    /// Builds the HTTP client and opens the store described by `config`.
    pub fn new(config: &IngestConfig) -> Result<Self, ConfigError> {
        let store = ContentStore::from_config(config.store_dir.as_deref())?;
        Self::with_store(config, store)
    }

    /// Like [`new`](Self::new) but with an explicit store.
    pub fn with_store(config: &IngestConfig, store: ContentStore) -> Result<Self, ConfigError> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| ConfigError::HttpClient(err.to_string()))?;

        Ok(Self {
            client,
            store,
            max_payload_bytes: config.max_payload_bytes,
        })
    }

    pub fn store_handle(&self) -> &ContentStore {
        &self.store
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, String> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|err| describe_reqwest(&err))?;

        if let (Some(limit), Some(declared)) = (self.max_payload_bytes, response.content_length()) {
            if declared > limit as u64 {
                return Err(too_large(declared, limit));
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|err| describe_reqwest(&err))?
        {
            body.extend_from_slice(&chunk);
            if let Some(limit) = self.max_payload_bytes {
                if body.len() > limit {
                    return Err(too_large(body.len() as u64, limit));
                }
            }
        }
        Ok(body)
    }
}

#[async_trait]
impl ContentFetcher for HttpContentFetcher {
    async fn fetch(&self, url: &str) -> Result<String, IngestError> {
        let start = Instant::now();

        let result = async {
            let body = self.download(url).await?;
            let path = self
                .store
                .put("httpget", &body)
                .await
                .map_err(|err| err.to_string())?;
            debug!(path = %path.display(), bytes = body.len(), "fetched body stored");
            self.store
                .read_text(&path)
                .await
                .map_err(|err| err.to_string())
        }
        .await;

        let elapsed_micros = start.elapsed().as_micros();
        match result {
            Ok(text) => {
                info!(url, bytes = text.len(), elapsed_micros, "fetch_success");
                Ok(text)
            }
            Err(message) => {
                warn!(url, error = %message, elapsed_micros, "fetch_failure");
                Err(IngestError::fetch(url, message))
            }
        }
    }

    async fn store(&self, upload: &UploadedFile) -> Result<String, IngestError> {
        if let Some(limit) = self.max_payload_bytes {
            if upload.len() > limit {
                return Err(IngestError::upload(too_large(upload.len() as u64, limit)));
            }
        }

        let prefix = upload.sanitized_name().unwrap_or_else(|| "upload".into());
        let path = self
            .store
            .put(&prefix, &upload.bytes)
            .await
            .map_err(IngestError::upload)?;
        debug!(path = %path.display(), bytes = upload.len(), "upload stored");

        self.store
            .read_text(&path)
            .await
            .map_err(IngestError::upload)
    }
}

fn too_large(actual: u64, limit: usize) -> String {
    format!("payload size {actual} exceeds limit of {limit} bytes")
}

/// Flattens a reqwest error and its sources into one line.
fn describe_reqwest(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    if err.is_timeout() {
        format!("request timed out: {message}")
    } else {
        message
    }
}
