//! Admin endpoints for projects.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use domain::models::project::{CreateProjectRequest, UpdateProjectRequest};
use domain::models::Project;
use persistence::repositories::ProjectRepository;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Routes mounted at `{prefix}/api/projects`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route(
            "/:id",
            get(get_project).put(update_project).delete(delete_project),
        )
}

async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    let repo = ProjectRepository::new(state.pool.clone());
    let projects = repo.list_all().await?;
    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// POST /projects
///
/// Without a slug, one is derived from the title and suffixed until unique.
async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    request.validate()?;

    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo.create(&request).await?;
    tracing::info!(project_id = project.id, slug = %project.slug, "Project created");

    Ok((StatusCode::CREATED, Json(project.into())))
}

async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Project>, ApiError> {
    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Project {} not found", id)))?;
    Ok(Json(project.into()))
}

async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateProjectRequest>,
) -> Result<Json<Project>, ApiError> {
    request.validate_all()?;

    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo.update(id, &request).await?;
    Ok(Json(project.into()))
}

async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    ProjectRepository::new(state.pool.clone()).delete(id).await?;
    tracing::info!(project_id = id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}
