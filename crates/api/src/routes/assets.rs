//! Static site assets and uploaded media.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

use crate::app::AppState;

/// Stylesheet, script and icons compiled into the binary.
#[derive(Embed)]
#[folder = "assets/static/"]
struct StaticAssets;

const STATIC_CACHE_CONTROL: &str = "public, max-age=3600";
const MEDIA_CACHE_CONTROL: &str = "public, max-age=86400";

/// Serves `/static/*path` from the embedded assets.
pub async fn static_asset(Path(path): Path<String>) -> Response {
    match StaticAssets::get(&path) {
        Some(content) => file_response(&path, content.data.into_owned(), STATIC_CACHE_CONTROL),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Serves an uploaded file from the media store.
pub async fn media_file(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    let Some(location) = state.media.resolve(&path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read(&location).await {
        Ok(bytes) => file_response(&path, bytes, MEDIA_CACHE_CONTROL),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            // Directories land here too.
            tracing::warn!(path = %path, error = %e, "Failed to read media file");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

fn file_response(path: &str, bytes: Vec<u8>, cache_control: &'static str) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, cache_control)
        .body(Body::from(bytes))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
