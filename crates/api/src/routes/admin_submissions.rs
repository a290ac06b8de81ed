//! Admin endpoints for contact submissions.

use std::collections::{HashMap, HashSet};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use domain::models::contact_submission::{
    SubmissionActionRequest, SubmissionActionResult, SubmissionListQuery,
    UpdateSubmissionRequest,
};
use domain::models::{ContactSubmission, SubmissionStatus};
use persistence::repositories::ContactSubmissionRepository;
use shared::pagination::{clamp_page_size, Cursor, Page};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Routes mounted at `{prefix}/api/submissions`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_submissions))
        .route("/actions", post(apply_action))
        .route(
            "/:id",
            get(get_submission)
                .patch(update_submission)
                .delete(delete_submission),
        )
}

/// GET /submissions?cursor=&limit=&status=
///
/// Newest first. Listed `new` records are moved to `read`; records that
/// changed are returned in their new state.
async fn list_submissions(
    State(state): State<AppState>,
    Query(query): Query<SubmissionListQuery>,
) -> Result<Json<Page<ContactSubmission>>, ApiError> {
    let after = query
        .cursor
        .as_deref()
        .map(Cursor::decode)
        .transpose()
        .map_err(|e| ApiError::Validation(format!("Invalid cursor: {}", e)))?;
    let limit = clamp_page_size(query.limit);

    let repo = ContactSubmissionRepository::new(state.pool.clone());
    let rows = repo.list_page(after, limit, query.status).await?;
    let page = Page::from_overfetch(rows, limit, |row| Cursor::new(row.submitted_at, row.id));

    let mut data: Vec<ContactSubmission> = page.data.into_iter().map(Into::into).collect();
    let unread: Vec<i64> = data
        .iter()
        .filter(|s| s.status == SubmissionStatus::New)
        .map(|s| s.id)
        .collect();

    if !unread.is_empty() {
        let marked: HashMap<i64, ContactSubmission> = repo
            .mark_read(&unread)
            .await?
            .into_iter()
            .map(|row| (row.id, ContactSubmission::from(row)))
            .collect();
        tracing::debug!(marked = marked.len(), "Marked listed submissions as read");

        for submission in data.iter_mut() {
            if let Some(updated) = marked.get(&submission.id) {
                *submission = updated.clone();
            }
        }
    }

    Ok(Json(Page {
        data,
        next_cursor: page.next_cursor,
    }))
}

async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ContactSubmission>, ApiError> {
    let repo = ContactSubmissionRepository::new(state.pool.clone());
    let submission = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Submission {} not found", id)))?;
    Ok(Json(submission.into()))
}

/// PATCH /submissions/:id
///
/// The status change is applied first so a refused transition leaves the
/// notes untouched.
async fn update_submission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateSubmissionRequest>,
) -> Result<Json<ContactSubmission>, ApiError> {
    request.validate()?;
    if request.admin_notes.is_none() && request.status.is_none() {
        return Err(ApiError::Validation(
            "Provide admin_notes or status".to_string(),
        ));
    }

    let repo = ContactSubmissionRepository::new(state.pool.clone());
    let mut current = None;

    if let Some(status) = request.status {
        let updated = repo.transition(id, status).await?;
        tracing::info!(submission_id = id, status = status.as_str(), "Submission status changed");
        current = Some(updated);
    }

    if let Some(notes) = &request.admin_notes {
        let updated = repo
            .update_notes(id, notes)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Submission {} not found", id)))?;
        current = Some(updated);
    }

    current
        .map(|row| Json(row.into()))
        .ok_or_else(|| ApiError::Internal("Submission update produced no row".to_string()))
}

async fn delete_submission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = ContactSubmissionRepository::new(state.pool.clone());
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound(format!("Submission {} not found", id)));
    }
    tracing::info!(submission_id = id, "Submission deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /submissions/actions
///
/// Ids whose status did not change (unknown ids, already in the target
/// state, or archived for `mark_replied`) are reported as skipped.
async fn apply_action(
    State(state): State<AppState>,
    Json(request): Json<SubmissionActionRequest>,
) -> Result<Json<SubmissionActionResult>, ApiError> {
    request.validate()?;

    let mut seen = HashSet::new();
    let ids: Vec<i64> = request.ids.iter().copied().filter(|id| seen.insert(*id)).collect();

    let repo = ContactSubmissionRepository::new(state.pool.clone());
    let changed: HashSet<i64> = repo
        .apply_action(request.action, &ids)
        .await?
        .into_iter()
        .collect();
    let skipped: Vec<i64> = ids.iter().copied().filter(|id| !changed.contains(id)).collect();

    tracing::info!(
        action = ?request.action,
        updated = changed.len(),
        skipped = skipped.len(),
        "Bulk submission action applied"
    );

    Ok(Json(SubmissionActionResult {
        action: request.action,
        updated: changed.len() as u64,
        skipped,
    }))
}
