//! Admin sign-in, sign-out and landing page.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Extension, Form,
};
use chrono::{Duration, Utc};
use domain::models::admin::{safe_next_path, LoginForm};
use domain::models::{AdminSession, AdminUser, SubmissionStatus};
use persistence::repositories::{AdminRepository, ContactSubmissionRepository};
use serde::Deserialize;
use shared::crypto::{generate_session_token, sha256_hex};
use shared::password::verify_password;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{audit_client_ip, RequestClient};
use crate::services::cookies::{append_set_cookie, extract_cookie, ADMIN_SESSION_COOKIE};
use crate::services::CookieHelper;
use crate::views::{self, LoginView};

const MSG_INVALID_CREDENTIALS: &str = "Invalid username or password.";
const MSG_CREDENTIALS_REQUIRED: &str = "Please enter a username and password.";

#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}

/// `GET {prefix}/login/`
pub async fn login_form(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
) -> Html<String> {
    let view = LoginView {
        admin_prefix: &state.config.admin.path_prefix,
        site_name: &state.config.site.name,
        next: query.next.as_deref(),
        ..Default::default()
    };
    Html(views::login_page(&view).into_string())
}

/// `POST {prefix}/login/`
///
/// Failed attempts re-render the form with HTTP 200.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    client: RequestClient,
    Form(form): Form<LoginForm>,
) -> Result<Response, ApiError> {
    let prefix = &state.config.admin.path_prefix;

    if form.validate().is_err() {
        return Ok(render_login_error(&state, &form, MSG_CREDENTIALS_REQUIRED));
    }

    let repo = AdminRepository::new(state.pool.clone());
    let user: Option<AdminUser> = repo
        .find_user_by_username(form.username.trim())
        .await?
        .map(Into::into);

    let authenticated = match &user {
        Some(user) if user.is_active => verify_password(&form.password, &user.password_hash)
            .map_err(|e| ApiError::Internal(format!("Password verification failed: {}", e)))?,
        _ => false,
    };

    let user = match user {
        Some(user) if authenticated => user,
        _ => {
            tracing::warn!(
                target: "security",
                client_ip = %audit_client_ip(&headers, client.0.ip_address),
                username = %form.username,
                "Failed admin login"
            );
            return Ok(render_login_error(&state, &form, MSG_INVALID_CREDENTIALS));
        }
    };

    let token = generate_session_token();
    let expires_at = Utc::now() + Duration::hours(state.config.admin.session_ttl_hours);
    repo.create_session(user.id, &sha256_hex(&token), expires_at).await?;
    repo.touch_last_login(user.id).await?;

    match repo.purge_expired_sessions().await {
        Ok(0) => {}
        Ok(purged) => tracing::debug!(purged, "Purged expired admin sessions"),
        Err(e) => tracing::warn!(error = %e, "Failed to purge expired admin sessions"),
    }

    tracing::info!(username = %user.username, "Admin signed in");

    let target = safe_next_path(form.next.as_deref(), prefix);
    let cookies = CookieHelper::new(&state.config.admin);
    let mut response = (StatusCode::FOUND, [(header::LOCATION, target)]).into_response();
    append_set_cookie(response.headers_mut(), &cookies.session_cookie(&token));
    Ok(response)
}

/// `POST {prefix}/logout/`
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    Extension(session): Extension<AdminSession>,
) -> Result<Response, ApiError> {
    if let Some(token) = extract_cookie(&headers, ADMIN_SESSION_COOKIE) {
        AdminRepository::new(state.pool.clone())
            .delete_session(&sha256_hex(token))
            .await?;
    }
    tracing::info!(username = %session.username, "Admin signed out");

    let cookies = CookieHelper::new(&state.config.admin);
    let location = format!("{}/login/", state.config.admin.path_prefix);
    let mut response = (StatusCode::FOUND, [(header::LOCATION, location)]).into_response();
    append_set_cookie(response.headers_mut(), &cookies.clear_session_cookie());
    Ok(response)
}

/// `GET {prefix}/`
pub async fn landing(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
) -> Result<Html<String>, ApiError> {
    let new_submissions = ContactSubmissionRepository::new(state.pool.clone())
        .count_by_status(SubmissionStatus::New)
        .await?;

    let markup = views::admin_landing(
        &state.config.site.name,
        &state.config.admin.path_prefix,
        &session.username,
        new_submissions,
    );
    Ok(Html(markup.into_string()))
}

fn render_login_error(state: &AppState, form: &LoginForm, error: &str) -> Response {
    let view = LoginView {
        admin_prefix: &state.config.admin.path_prefix,
        site_name: &state.config.site.name,
        username: &form.username,
        next: form.next.as_deref(),
        error: Some(error),
    };
    Html(views::login_page(&view).into_string()).into_response()
}
