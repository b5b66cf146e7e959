//! Dataset upload route.

use axum::{
    extract::{Multipart, Path, State},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::error;

use niaga_core::ingest::IngestService;
use niaga_shared::types::SessionId;
use niaga_shared::AppError;

use super::filters::SelectionResponse;
use crate::error::{session_not_found, ApiError};
use crate::AppState;

/// Creates the dataset routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/sessions/{id}/dataset", post(upload_dataset))
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for a successful dataset upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Number of ingested rows.
    pub rows: usize,
    /// Observed filter options for building the filter controls.
    pub options: SelectionResponse,
    /// The default filter selection now active on the session.
    pub selection: SelectionResponse,
}

// ============================================================================
// Handlers
// ============================================================================

/// Ingests an uploaded spreadsheet and replaces the session dataset.
///
/// The first multipart field carrying data is treated as the workbook; any
/// ingestion failure is fatal for the upload and leaves the session
/// untouched.
async fn upload_dataset(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let bytes = match read_upload(&mut multipart).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            return ApiError(AppError::Validation(
                "Multipart body contains no file field".to_string(),
            ))
            .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to read multipart upload");
            return ApiError(AppError::Validation(
                "Malformed multipart body".to_string(),
            ))
            .into_response();
        }
    };

    let dataset = match IngestService::parse_workbook(&bytes) {
        Ok(dataset) => dataset,
        Err(e) => {
            return ApiError(AppError::UnprocessableUpload(e.to_string())).into_response();
        }
    };
    let rows = dataset.len();

    let Some(mut session) = state.sessions.get_mut(&id) else {
        return session_not_found();
    };

    match session.load_dataset(dataset) {
        Ok(selection) => {
            // A fresh default selection mirrors the observed options.
            let selection = SelectionResponse::from(selection);
            Json(UploadResponse {
                rows,
                options: selection.clone(),
                selection,
            })
            .into_response()
        }
        Err(e) => ApiError(AppError::UnprocessableUpload(e.to_string())).into_response(),
    }
}

/// Pulls the first data-bearing field out of the multipart body.
async fn read_upload(multipart: &mut Multipart) -> Result<Option<Vec<u8>>, axum::Error> {
    while let Some(field) = multipart.next_field().await.map_err(axum::Error::new)? {
        let bytes = field.bytes().await.map_err(axum::Error::new)?;
        if !bytes.is_empty() {
            return Ok(Some(bytes.to_vec()));
        }
    }
    Ok(None)
}
