//! Security audit of access to the administrative area.

use axum::{body::Body, http::Request, http::StatusCode, middleware::Next, response::Response};

use super::admin_auth::{requested_path, LoginRedirect};
use crate::extractors::{audit_client_ip, connection_ip};

/// Logs a warning for every admin request bounced to the login page.
///
/// Wraps the admin router outside [`super::require_admin`], so it sees the
/// redirect that layer produces. Events use the `security` target.
pub async fn admin_audit_middleware(req: Request<Body>, next: Next) -> Response {
    let client_ip = audit_client_ip(req.headers(), connection_ip(req.extensions()));
    let path = requested_path(&req);
    let method = req.method().clone();

    let response = next.run(req).await;

    if response.status() == StatusCode::FOUND
        && response.extensions().get::<LoginRedirect>().is_some()
    {
        tracing::warn!(
            target: "security",
            client_ip = %client_ip,
            method = %method,
            path = %path,
            "Unauthenticated admin access attempt"
        );
    }

    response
}
