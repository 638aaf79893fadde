use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use wordstat::{FailureKind, PipelineError};

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Failed to process request with error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Pipeline(err) => match err.kind() {
                FailureKind::InvalidRequest | FailureKind::UploadFailure => {
                    StatusCode::BAD_REQUEST
                }
                FailureKind::FetchFailure | FailureKind::EmptyTextFailure => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                FailureKind::ProcessingFailure => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ServerError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::Internal(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::Pipeline(err) => match err.kind() {
                FailureKind::InvalidRequest => "INVALID_REQUEST",
                FailureKind::UploadFailure => "UPLOAD_FAILURE",
                FailureKind::FetchFailure => "FETCH_FAILURE",
                FailureKind::EmptyTextFailure => "EMPTY_TEXT",
                FailureKind::ProcessingFailure => "PROCESSING_FAILURE",
            },
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::Unavailable(_) => "SERVICE_UNAVAILABLE",
            ServerError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code().to_string();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(code = %code, error = %message, "request failed");
        } else {
            tracing::warn!(code = %code, error = %message, "request rejected");
        }

        let body = Json(ErrorResponse {
            error: ErrorDetail { code, message },
        });

        (status, body).into_response()
    }
}

impl From<ingest::IngestError> for ServerError {
    fn from(err: ingest::IngestError) -> Self {
        ServerError::Pipeline(PipelineError::Ingest(err))
    }
}

impl From<ingest::ConfigError> for ServerError {
    fn from(err: ingest::ConfigError) -> Self {
        ServerError::Config(err.to_string())
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Config(format!("Invalid address: {err}"))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}
