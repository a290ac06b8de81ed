//! Admin media uploads.

use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::media_storage::MediaError;
use crate::services::{MediaFolder, StoredMedia};

/// Multipart field carrying the upload.
const FILE_FIELD: &str = "file";

/// Routes mounted at `{prefix}/api/media`, with their own body limit.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/:folder", post(upload))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

/// POST /media/:folder
///
/// Stores the `file` field and returns the path to put into the matching
/// `*_file` column.
async fn upload(
    State(state): State<AppState>,
    Path(folder): Path<String>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<StoredMedia>), ApiError> {
    let folder: MediaFolder = folder.parse().map_err(media_error)?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e.status(), e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e.status(), e.body_text()))?;

        let stored = state
            .media
            .store(folder, &file_name, &bytes)
            .await
            .map_err(media_error)?;

        return Ok((StatusCode::CREATED, Json(stored)));
    }

    Err(ApiError::Validation(format!(
        "Multipart field '{}' is required",
        FILE_FIELD
    )))
}

fn media_error(err: MediaError) -> ApiError {
    match err {
        MediaError::Io(e) => ApiError::Internal(format!("Failed to store media: {}", e)),
        other => ApiError::Validation(other.to_string()),
    }
}

fn multipart_error(status: StatusCode, message: String) -> ApiError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(message)
    } else {
        ApiError::Validation(format!("Invalid multipart body: {}", message))
    }
}
