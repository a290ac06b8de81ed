//! Admin endpoints for services.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use domain::models::service::{CreateServiceRequest, UpdateServiceRequest};
use domain::models::Service;
use persistence::repositories::ServiceRepository;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Routes mounted at `{prefix}/api/services`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_services).post(create_service))
        .route(
            "/:id",
            get(get_service).put(update_service).delete(delete_service),
        )
}

/// All services, active or not, in display order.
async fn list_services(State(state): State<AppState>) -> Result<Json<Vec<Service>>, ApiError> {
    let repo = ServiceRepository::new(state.pool.clone());
    let services = repo.list_all().await?;
    Ok(Json(services.into_iter().map(Into::into).collect()))
}

async fn create_service(
    State(state): State<AppState>,
    Json(request): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<Service>), ApiError> {
    request.validate()?;

    let repo = ServiceRepository::new(state.pool.clone());
    let service = repo.create(&request).await?;
    tracing::info!(service_id = service.id, slug = %service.slug, "Service created");

    Ok((StatusCode::CREATED, Json(service.into())))
}

async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Service>, ApiError> {
    let repo = ServiceRepository::new(state.pool.clone());
    let service = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Service {} not found", id)))?;
    Ok(Json(service.into()))
}

async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateServiceRequest>,
) -> Result<Json<Service>, ApiError> {
    request.validate()?;

    let repo = ServiceRepository::new(state.pool.clone());
    let service = repo.update(id, &request).await?;
    Ok(Json(service.into()))
}

async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    ServiceRepository::new(state.pool.clone()).delete(id).await?;
    tracing::info!(service_id = id, "Service deleted");
    Ok(StatusCode::NO_CONTENT)
}
