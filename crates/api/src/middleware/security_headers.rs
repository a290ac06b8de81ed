//! Security headers middleware.
//!
//! Applies the site's response header policy to every response.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
script-src 'self' 'unsafe-inline' https://fonts.googleapis.com https://kit.fontawesome.com https://ka-f.fontawesome.com; \
style-src 'self' 'unsafe-inline' https://fonts.googleapis.com https://ka-f.fontawesome.com; \
font-src 'self' https://fonts.gstatic.com https://ka-f.fontawesome.com; \
img-src 'self' data: https: http:; \
connect-src 'self'; \
frame-ancestors 'none'; \
object-src 'none'; \
base-uri 'self'; \
form-action 'self'; \
upgrade-insecure-requests";

pub const PERMISSIONS_POLICY: &str = "geolocation=(), microphone=(), camera=(), payment=(), \
usb=(), accelerometer=(), gyroscope=(), magnetometer=()";

pub const REFERRER_POLICY: &str = "strict-origin-when-cross-origin";

pub const ADMIN_CACHE_CONTROL: &str = "no-cache, no-store, must-revalidate, private";

pub const HSTS: &str = "max-age=31536000; includeSubDomains";

/// Inputs of the header policy that vary by deployment.
#[derive(Debug, Clone)]
pub struct SecurityPolicy {
    /// Administrative prefix without trailing slash, e.g. `/admin`.
    pub admin_prefix: String,
    pub hsts_enabled: bool,
}

impl SecurityPolicy {
    pub fn is_admin_path(&self, path: &str) -> bool {
        path.strip_prefix(self.admin_prefix.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }
}

/// Adds the security headers and strips server identification.
///
/// Responses under the admin prefix are additionally marked uncacheable.
pub async fn security_headers_middleware(
    State(policy): State<Arc<SecurityPolicy>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let is_admin = policy.is_admin_path(req.uri().path());

    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CONTENT_SECURITY_POLICY),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::X_XSS_PROTECTION,
        HeaderValue::from_static("1; mode=block"),
    );
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static(REFERRER_POLICY),
    );
    headers.insert(
        header::HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(PERMISSIONS_POLICY),
    );

    headers.remove(header::SERVER);
    headers.remove("x-powered-by");

    if is_admin {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(ADMIN_CACHE_CONTROL),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    }

    if policy.hsts_enabled {
        headers.insert(header::STRICT_TRANSPORT_SECURITY, HeaderValue::from_static(HSTS));
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn policy(hsts_enabled: bool) -> Arc<SecurityPolicy> {
        Arc::new(SecurityPolicy {
            admin_prefix: "/admin".to_string(),
            hsts_enabled,
        })
    }

    fn router(policy: Arc<SecurityPolicy>) -> Router {
        Router::new()
            .route(
                "/",
                get(|| async { ([("server", "gunicorn"), ("x-powered-by", "Django")], "home") }),
            )
            .route("/admin/", get(|| async { "admin" }))
            .route("/administrator", get(|| async { "not admin" }))
            .layer(middleware::from_fn_with_state(
                policy,
                security_headers_middleware,
            ))
    }

    async fn get_response(router: Router, uri: &str) -> Response {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_public_response_headers() {
        let response = get_response(router(policy(false)), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let headers = response.headers();
        assert_eq!(headers["content-security-policy"], CONTENT_SECURITY_POLICY);
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
        assert_eq!(headers["x-xss-protection"], "1; mode=block");
        assert_eq!(headers["referrer-policy"], REFERRER_POLICY);
        assert_eq!(headers["permissions-policy"], PERMISSIONS_POLICY);
        assert!(headers.get("server").is_none());
        assert!(headers.get("x-powered-by").is_none());
        assert!(headers.get("cache-control").is_none());
        assert!(headers.get("strict-transport-security").is_none());
    }

    #[tokio::test]
    async fn test_admin_responses_are_uncacheable() {
        let response = get_response(router(policy(false)), "/admin/").await;
        let headers = response.headers();
        assert_eq!(headers["cache-control"], ADMIN_CACHE_CONTROL);
        assert_eq!(headers["pragma"], "no-cache");
        assert_eq!(headers["expires"], "0");
        assert_eq!(headers["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn test_prefix_match_respects_segment_boundary() {
        let response = get_response(router(policy(false)), "/administrator").await;
        assert!(response.headers().get("cache-control").is_none());
    }

    #[tokio::test]
    async fn test_headers_on_not_found() {
        let response = get_response(router(policy(false)), "/missing").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn test_hsts_when_enabled() {
        let response = get_response(router(policy(true)), "/").await;
        assert_eq!(response.headers()["strict-transport-security"], HSTS);
    }

    #[test]
    fn test_csp_directives() {
        assert!(CONTENT_SECURITY_POLICY.starts_with("default-src 'self';"));
        assert!(CONTENT_SECURITY_POLICY.contains("frame-ancestors 'none'"));
        assert!(CONTENT_SECURITY_POLICY.ends_with("upgrade-insecure-requests"));
    }
}
