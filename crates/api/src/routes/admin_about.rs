//! Admin endpoints for About sections.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use domain::models::about::{CreateAboutRequest, UpdateAboutRequest};
use domain::models::AboutSection;
use persistence::repositories::AboutRepository;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Routes mounted at `{prefix}/api/about`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sections).post(create_section))
        .route(
            "/:id",
            get(get_section).put(update_section).delete(delete_section),
        )
        .route("/:id/activate", post(activate_section))
}

/// GET /about
async fn list_sections(
    State(state): State<AppState>,
) -> Result<Json<Vec<AboutSection>>, ApiError> {
    let repo = AboutRepository::new(state.pool.clone());
    let sections = repo.list_all().await?;
    Ok(Json(sections.into_iter().map(Into::into).collect()))
}

/// POST /about
///
/// An active new section deactivates the current one.
async fn create_section(
    State(state): State<AppState>,
    Json(request): Json<CreateAboutRequest>,
) -> Result<(StatusCode, Json<AboutSection>), ApiError> {
    request.validate()?;

    let repo = AboutRepository::new(state.pool.clone());
    let section = repo.create(&request).await?;
    tracing::info!(about_id = section.id, is_active = section.is_active, "About section created");

    Ok((StatusCode::CREATED, Json(section.into())))
}

async fn get_section(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AboutSection>, ApiError> {
    let repo = AboutRepository::new(state.pool.clone());
    let section = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("About section {} not found", id)))?;
    Ok(Json(section.into()))
}

async fn update_section(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateAboutRequest>,
) -> Result<Json<AboutSection>, ApiError> {
    request.validate()?;

    let repo = AboutRepository::new(state.pool.clone());
    let section = repo.update(id, &request).await?;
    tracing::info!(about_id = id, "About section updated");

    Ok(Json(section.into()))
}

async fn delete_section(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = AboutRepository::new(state.pool.clone());
    repo.delete(id).await?;
    tracing::info!(about_id = id, "About section deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /about/:id/activate
async fn activate_section(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AboutSection>, ApiError> {
    let repo = AboutRepository::new(state.pool.clone());
    let section = repo.activate(id).await?;
    tracing::info!(about_id = id, "About section activated");
    Ok(Json(section.into()))
}
