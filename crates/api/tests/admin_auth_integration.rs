//! Integration tests for admin sign-in, the login redirect and header policy.

mod common;

use axum::http::{header, Method, StatusCode};
use common::{
    body_text, create_admin, create_test_app, form_request, get_request, lazy_pool, location,
    login_admin, request_with_cookie, set_cookies, setup_test_db, test_config, ADMIN_USERNAME,
};
use tower::ServiceExt;

// ============================================================================
// Login redirect (no database needed)
// ============================================================================

#[tokio::test]
async fn test_unauthenticated_admin_request_redirects_to_login() {
    let app = create_test_app(test_config(), lazy_pool());

    let response = app
        .oneshot(get_request("/admin/api/submissions?status=new"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        location(&response),
        "/admin/login/?next=%2Fadmin%2Fapi%2Fsubmissions%3Fstatus%3Dnew"
    );
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "no-cache, no-store, must-revalidate, private"
    );
    assert_eq!(response.headers()[header::PRAGMA], "no-cache");
    assert_eq!(response.headers()[header::EXPIRES], "0");
}

#[tokio::test]
async fn test_admin_landing_redirect_keeps_next() {
    let app = create_test_app(test_config(), lazy_pool());

    let response = app.oneshot(get_request("/admin/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/admin/login/?next=%2Fadmin%2F");
}

#[tokio::test]
async fn test_unknown_cookie_value_without_database_is_internal_error() {
    let app = create_test_app(test_config(), lazy_pool());

    let response = app
        .oneshot(request_with_cookie(Method::GET, "/admin/", "mechfab_admin=bogus"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_login_form_renders() {
    let app = create_test_app(test_config(), lazy_pool());

    let response = app
        .oneshot(get_request("/admin/login/?next=/admin/api/about"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CACHE_CONTROL]
        .to_str()
        .unwrap()
        .contains("no-store"));

    let html = body_text(response).await;
    assert!(html.contains(r#"action="/admin/login/""#));
    assert!(html.contains(r#"value="/admin/api/about""#));
}

#[tokio::test]
async fn test_public_responses_carry_security_headers() {
    let app = create_test_app(test_config(), lazy_pool());

    let response = app.oneshot(get_request("/static/site.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert!(headers[header::CONTENT_SECURITY_POLICY]
        .to_str()
        .unwrap()
        .starts_with("default-src 'self'"));
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
    assert_eq!(
        headers[header::REFERRER_POLICY],
        "strict-origin-when-cross-origin"
    );
    assert!(headers.get("permissions-policy").is_some());
    assert!(headers.get(header::SERVER).is_none());
    assert!(headers.get(header::STRICT_TRANSPORT_SECURITY).is_none());
    assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=3600");
    assert!(headers.get("x-request-id").is_some());
}

#[tokio::test]
async fn test_hsts_when_enabled() {
    let mut config = test_config();
    config.security.hsts_enabled = true;
    let app = create_test_app(config, lazy_pool());

    let response = app.oneshot(get_request("/health/live")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::STRICT_TRANSPORT_SECURITY)
        .is_some());
}

#[tokio::test]
async fn test_custom_admin_prefix() {
    let mut config = test_config();
    config.admin.path_prefix = "/staff".to_string();
    let app = create_test_app(config, lazy_pool());

    let response = app
        .clone()
        .oneshot(get_request("/staff/api/about"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/staff/login/?next=%2Fstaff%2Fapi%2Fabout");

    let response = app.oneshot(get_request("/admin/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Sessions (database)
// ============================================================================

#[tokio::test]
async fn test_login_with_bad_password_rerenders_form() {
    let db = setup_test_db().await;
    create_admin(&db.pool).await;
    let app = create_test_app(test_config(), db.pool.clone());

    let response = app
        .oneshot(form_request(
            "/admin/login/",
            &format!("username={}&password=wrong&next=/admin/api/about", ADMIN_USERNAME),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookies(&response).is_empty());
    let html = body_text(response).await;
    assert!(html.contains("Invalid username or password."));
    assert!(html.contains(r#"value="/admin/api/about""#));
}

#[tokio::test]
async fn test_login_unknown_user_rerenders_form() {
    let db = setup_test_db().await;
    let app = create_test_app(test_config(), db.pool.clone());

    let response = app
        .oneshot(form_request("/admin/login/", "username=nobody&password=secret"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Invalid username or password."));
}

#[tokio::test]
async fn test_login_sets_session_cookie_and_honors_next() {
    let db = setup_test_db().await;
    create_admin(&db.pool).await;
    let app = create_test_app(test_config(), db.pool.clone());

    let response = app
        .clone()
        .oneshot(form_request(
            "/admin/login/",
            "username=owner&password=correct+horse+battery+staple&next=/admin/api/services",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/admin/api/services");
    let cookie = set_cookies(&response)
        .into_iter()
        .find(|c| c.starts_with("mechfab_admin="))
        .unwrap();
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/admin"));
    assert!(!cookie.contains("Secure"));

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admin_sessions")
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(stored, 1);
}

#[tokio::test]
async fn test_login_ignores_offsite_next() {
    let db = setup_test_db().await;
    create_admin(&db.pool).await;
    let app = create_test_app(test_config(), db.pool.clone());

    let response = app
        .oneshot(form_request(
            "/admin/login/",
            "username=owner&password=correct+horse+battery+staple&next=https://evil.example.com/",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/admin/");
}

#[tokio::test]
async fn test_landing_page_after_login() {
    let db = setup_test_db().await;
    create_admin(&db.pool).await;
    let app = create_test_app(test_config(), db.pool.clone());
    let cookie = login_admin(&app).await;

    let response = app
        .oneshot(request_with_cookie(Method::GET, "/admin/", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Signed in as <strong>owner</strong>"));
    assert!(html.contains("0 new contact submissions."));
}

#[tokio::test]
async fn test_logout_ends_session() {
    let db = setup_test_db().await;
    create_admin(&db.pool).await;
    let app = create_test_app(test_config(), db.pool.clone());
    let cookie = login_admin(&app).await;

    let response = app
        .clone()
        .oneshot(request_with_cookie(Method::POST, "/admin/logout/", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/admin/login/");
    assert!(set_cookies(&response)
        .iter()
        .any(|c| c.starts_with("mechfab_admin=;") && c.contains("Max-Age=0")));

    let response = app
        .oneshot(request_with_cookie(Method::GET, "/admin/", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn test_expired_session_is_rejected() {
    let db = setup_test_db().await;
    create_admin(&db.pool).await;
    let app = create_test_app(test_config(), db.pool.clone());
    let cookie = login_admin(&app).await;

    sqlx::query("UPDATE admin_sessions SET expires_at = NOW() - INTERVAL '1 minute'")
        .execute(&db.pool)
        .await
        .unwrap();

    let response = app
        .oneshot(request_with_cookie(Method::GET, "/admin/api/about", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
}
