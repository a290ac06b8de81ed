//! Admin endpoints for contact information records.
//!
//! Same shape as the About endpoints. Deleting the only active record is
//! refused with `409 protected_deletion`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use domain::models::contact_info::{CreateContactInfoRequest, UpdateContactInfoRequest};
use domain::models::ContactInfo;
use persistence::repositories::ContactInfoRepository;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Routes mounted at `{prefix}/api/contact-info`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_records).post(create_record))
        .route(
            "/:id",
            get(get_record).put(update_record).delete(delete_record),
        )
        .route("/:id/activate", post(activate_record))
}

async fn list_records(State(state): State<AppState>) -> Result<Json<Vec<ContactInfo>>, ApiError> {
    let repo = ContactInfoRepository::new(state.pool.clone());
    let records = repo.list_all().await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

async fn create_record(
    State(state): State<AppState>,
    Json(request): Json<CreateContactInfoRequest>,
) -> Result<(StatusCode, Json<ContactInfo>), ApiError> {
    request.validate()?;

    let repo = ContactInfoRepository::new(state.pool.clone());
    let record = repo.create(&request).await?;
    tracing::info!(
        contact_info_id = record.id,
        is_active = record.is_active,
        "Contact info created"
    );

    Ok((StatusCode::CREATED, Json(record.into())))
}

async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ContactInfo>, ApiError> {
    let repo = ContactInfoRepository::new(state.pool.clone());
    let record = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Contact info {} not found", id)))?;
    Ok(Json(record.into()))
}

async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateContactInfoRequest>,
) -> Result<Json<ContactInfo>, ApiError> {
    request.validate()?;

    let repo = ContactInfoRepository::new(state.pool.clone());
    let record = repo.update(id, &request).await?;
    tracing::info!(contact_info_id = id, "Contact info updated");

    Ok(Json(record.into()))
}

async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = ContactInfoRepository::new(state.pool.clone());
    repo.delete(id).await?;
    tracing::info!(contact_info_id = id, "Contact info deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn activate_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ContactInfo>, ApiError> {
    let repo = ContactInfoRepository::new(state.pool.clone());
    let record = repo.activate(id).await?;
    tracing::info!(contact_info_id = id, "Contact info activated");
    Ok(Json(record.into()))
}
