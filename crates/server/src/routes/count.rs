//! Word counting endpoints.
use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::multipart::{Field, Multipart, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use ingest::{IngestError, UploadedFile};
use std::sync::Arc;
use wordstat::{AnalysisResult, WordCountRequest};

/// Multipart field carrying the uploaded file
pub const FILE_FIELD: &str = "file";

/// Count words in inline text or in the document at a URL
///
/// # Request
///
/// ```json
/// { "text": "thy brother's blood" }
/// ```
///
/// or
///
/// ```json
/// { "url": "https://example.com/kingJames.txt" }
/// ```
///
/// When both are present `text` is used.
pub async fn count_text(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<WordCountRequest>, JsonRejection>,
) -> ServerResult<Json<AnalysisResult>> {
    let Json(request) = payload.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;

    let result = state.counter.analyze(request).await?;
    Ok(Json(result))
}

/// Count words in an uploaded file (multipart field `file`)
pub async fn count_file(
    State(state): State<Arc<ServerState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ServerResult<Json<AnalysisResult>> {
    let mut multipart =
        multipart.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(IngestError::upload)? {
        if field.name() == Some(FILE_FIELD) {
            upload = Some(read_upload(field).await?);
            break;
        }
    }

    let result = state.counter.analyze_upload(upload).await?;
    Ok(Json(result))
}

async fn read_upload(field: Field<'_>) -> Result<UploadedFile, IngestError> {
    let file_name = field.file_name().map(str::to_owned);
    let content_type = field.content_type().map(str::to_owned);
    let bytes = field.bytes().await.map_err(IngestError::upload)?;

    let mut upload = UploadedFile::new(file_name, bytes);
    if let Some(content_type) = content_type {
        upload = upload.with_content_type(content_type);
    }
    Ok(upload)
}
