//! Configuration types for text acquisition.
//!
//! [`IngestConfig`] controls how URLs are fetched and uploads are stored:
//! timeouts, the payload size ceiling, where fetched bytes are buffered and
//! the user agent sent upstream. It deserializes from any serde format; every
//! field has a default so partial configuration is fine.
//!
//! # Quick Start
//!
//! ```rust
//! use ingest::IngestConfig;
//!
//! let config = IngestConfig::default();
//! config.validate().expect("Invalid configuration");
//! assert_eq!(config.fetch_timeout().as_secs(), 30);
//! ```
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Runtime configuration for acquisition behavior.
///
/// ```json
/// {
///   "fetch_timeout_ms": 30000,
///   "connect_timeout_ms": 10000,
///   "max_payload_bytes": 67108864,
///   "store_dir": "/var/lib/wordstat/buffer",
///   "user_agent": "wordstat/0.1.0"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Whole-request timeout for URL fetches, in milliseconds.
    ///
    /// An elapsed timeout surfaces as a fetch failure. Default: `30000`
    pub fetch_timeout_ms: u64,

    /// TCP/TLS connect timeout for URL fetches, in milliseconds.
    ///
    /// Default: `10000`
    pub connect_timeout_ms: u64,

    /// Largest fetched body or uploaded file accepted, in bytes.
    ///
    /// The whole text is held in memory during analysis, so this is the
    /// memory ceiling per request. `None` disables the check.
    ///
    /// Default: `Some(64 MiB)`
    pub max_payload_bytes: Option<usize>,

    /// Directory used as the content store.
    ///
    /// `None` creates a fresh directory under the OS temp dir at startup.
    ///
    /// Default: `None`
    pub store_dir: Option<PathBuf>,

    /// `User-Agent` header sent with fetches.
    pub user_agent: String,
}

/// Errors raised when an [`IngestConfig`] cannot be used.
///
/// These are start-up problems; surface them before serving traffic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// A timeout was configured as zero.
    #[error("{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },

    /// `max_payload_bytes` was set to zero, which rejects every payload.
    #[error("max_payload_bytes must be greater than zero when set")]
    ZeroPayloadLimit,

    /// The content store directory could not be created.
    #[error("failed to create content store: {0}")]
    Store(String),

    /// The HTTP client could not be built.
    #[error("failed to build http client: {0}")]
    HttpClient(String),
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_ms: 30_000,
            connect_timeout_ms: 10_000,
            max_payload_bytes: Some(64 * 1024 * 1024),
            store_dir: None,
            user_agent: concat!("wordstat/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl IngestConfig {
    /// Checks internal consistency. Cheap; call once at start-up.
    ///
    /// ```rust
    /// use ingest::{ConfigError, IngestConfig};
    ///
    /// let bad = IngestConfig {
    ///     fetch_timeout_ms: 0,
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     bad.validate(),
    ///     Err(ConfigError::ZeroTimeout { field: "fetch_timeout_ms" })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout {
                field: "fetch_timeout_ms",
            });
        }
        if self.connect_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout {
                field: "connect_timeout_ms",
            });
        }
        if self.max_payload_bytes == Some(0) {
            return Err(ConfigError::ZeroPayloadLimit);
        }
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = IngestConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.connect_timeout(), Duration::from_secs(10));
        assert!(cfg.user_agent.starts_with("wordstat/"));
    }

    #[test]
    fn zero_connect_timeout_rejected() {
        let cfg = IngestConfig {
            connect_timeout_ms: 0,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ZeroTimeout {
                field: "connect_timeout_ms"
            })
        );
    }

    #[test]
    fn zero_payload_limit_rejected() {
        let cfg = IngestConfig {
            max_payload_bytes: Some(0),
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroPayloadLimit));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let cfg: IngestConfig =
            serde_json::from_str(r#"{"fetch_timeout_ms": 500, "max_payload_bytes": null}"#)
                .unwrap();
        assert_eq!(cfg.fetch_timeout_ms, 500);
        assert_eq!(cfg.max_payload_bytes, None);
        assert_eq!(cfg.connect_timeout_ms, 10_000);
    }
}
