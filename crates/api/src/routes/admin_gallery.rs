//! Admin endpoints for gallery items.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use domain::models::gallery::{CreateGalleryItemRequest, UpdateGalleryItemRequest};
use domain::models::GalleryItem;
use persistence::repositories::GalleryRepository;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Routes mounted at `{prefix}/api/gallery`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<GalleryItem>>, ApiError> {
    let repo = GalleryRepository::new(state.pool.clone());
    let items = repo.list_all().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

async fn create_item(
    State(state): State<AppState>,
    Json(request): Json<CreateGalleryItemRequest>,
) -> Result<(StatusCode, Json<GalleryItem>), ApiError> {
    request.validate()?;

    let repo = GalleryRepository::new(state.pool.clone());
    let item = repo.create(&request).await?;
    tracing::info!(gallery_item_id = item.id, "Gallery item created");

    Ok((StatusCode::CREATED, Json(item.into())))
}

async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<GalleryItem>, ApiError> {
    let repo = GalleryRepository::new(state.pool.clone());
    let item = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Gallery item {} not found", id)))?;
    Ok(Json(item.into()))
}

async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateGalleryItemRequest>,
) -> Result<Json<GalleryItem>, ApiError> {
    request.validate_all()?;

    let repo = GalleryRepository::new(state.pool.clone());
    let item = repo.update(id, &request).await?;
    Ok(Json(item.into()))
}

async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    GalleryRepository::new(state.pool.clone()).delete(id).await?;
    tracing::info!(gallery_item_id = id, "Gallery item deleted");
    Ok(StatusCode::NO_CONTENT)
}
