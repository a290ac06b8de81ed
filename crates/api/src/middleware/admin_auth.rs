//! Session authentication for the administrative area.

use axum::{
    body::Body,
    extract::{OriginalUri, State},
    http::{header, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use domain::models::AdminSession;
use persistence::repositories::AdminRepository;
use shared::crypto::sha256_hex;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::cookies::{extract_cookie, ADMIN_SESSION_COOKIE};

/// Marks a response as the login redirect issued by [`require_admin`].
#[derive(Debug, Clone, Copy)]
pub struct LoginRedirect;

/// Requires a valid admin session.
///
/// On success the [`AdminSession`] is attached to request extensions.
/// Otherwise the client is sent to the login page with `next` set to the
/// requested path.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = extract_cookie(req.headers(), ADMIN_SESSION_COOKIE).map(str::to_string);

    let session = match token {
        Some(token) if !token.is_empty() => {
            let repo = AdminRepository::new(state.pool.clone());
            match repo.find_valid_session(&sha256_hex(&token)).await {
                Ok(session) => session.map(AdminSession::from),
                Err(e) => {
                    tracing::error!("Database error during admin session lookup: {}", e);
                    return ApiError::Internal("Authentication service unavailable".into())
                        .into_response();
                }
            }
        }
        _ => None,
    };

    match session {
        Some(session) => {
            req.extensions_mut().insert(session);
            next.run(req).await
        }
        None => {
            let requested = requested_path(&req);
            login_redirect(&state.config.admin.path_prefix, &requested)
        }
    }
}

/// Path and query as the client sent them, before any router nesting.
pub fn requested_path(req: &Request<Body>) -> String {
    let uri = req
        .extensions()
        .get::<OriginalUri>()
        .map(|OriginalUri(uri)| uri)
        .unwrap_or_else(|| req.uri());
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}

/// `302 Found` to the login page, tagged with [`LoginRedirect`].
pub fn login_redirect(admin_prefix: &str, next: &str) -> Response {
    let location = match serde_urlencoded::to_string(&[("next", next)]) {
        Ok(query) => format!("{}/login/?{}", admin_prefix, query),
        Err(_) => format!("{}/login/", admin_prefix),
    };
    let mut response = StatusCode::FOUND.into_response();
    if let Ok(value) = HeaderValue::from_str(&location) {
        response.headers_mut().insert(header::LOCATION, value);
    }
    response.extensions_mut().insert(LoginRedirect);
    response
}
