//! Wordstat Server - HTTP API for word-length statistics
//!
//! Exposes the wordstat pipeline over HTTP: post text, a URL or a file and
//! get back the word count, mean word length, the length histogram and the
//! most frequent lengths.
//!
//! # Features
//!
//! - **Middleware**: CORS, request ID tracking, structured logging, timeouts
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: JSON error bodies with stable error codes
//! - **Metrics**: Prometheus exposition of pipeline and request counters
//! - **Graceful Shutdown**: Proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `POST /count/text` - JSON `{"text": ...}` or `{"url": ...}`
//! - `POST /count/file` - multipart upload, field `file`
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics

pub mod config;
pub mod error;
pub mod telemetry;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
