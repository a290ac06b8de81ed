//! Integration tests for slug assignment on services and projects.

mod common;

use axum::http::{Method, StatusCode};
use axum::Router;
use common::{
    create_admin, create_test_app, json_request_with_cookie, login_admin, parse_response_body,
    setup_test_db, test_config,
};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post(app: &Router, uri: &str, body: Value, cookie: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(json_request_with_cookie(Method::POST, uri, body, cookie))
        .await
        .unwrap();
    let status = response.status();
    (status, parse_response_body(response).await)
}

fn project(title: &str) -> Value {
    json!({
        "title": title,
        "category": "Industrial",
        "short_description": "Conveyor line",
        "full_description": "Design, fabrication and installation."
    })
}

#[tokio::test]
async fn test_project_titles_get_numbered_slugs() {
    let db = setup_test_db().await;
    create_admin(&db.pool).await;
    let app = create_test_app(test_config(), db.pool.clone());
    let cookie = login_admin(&app).await;

    let (status, first) = post(&app, "/admin/api/projects", project("Steel Shed"), &cookie).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["slug"], "steel-shed");

    let (_, second) = post(&app, "/admin/api/projects", project("Steel  Shed!"), &cookie).await;
    assert_eq!(second["slug"], "steel-shed-1");

    let (_, third) = post(&app, "/admin/api/projects", project("steel shed"), &cookie).await;
    assert_eq!(third["slug"], "steel-shed-2");
}

#[tokio::test]
async fn test_max_length_titles_keep_numbering() {
    let db = setup_test_db().await;
    create_admin(&db.pool).await;
    let app = create_test_app(test_config(), db.pool.clone());
    let cookie = login_admin(&app).await;
    let title = "a".repeat(200);

    let mut slugs = Vec::new();
    for _ in 0..4 {
        let (status, created) = post(&app, "/admin/api/projects", project(&title), &cookie).await;
        assert_eq!(status, StatusCode::CREATED, "{}", created);
        slugs.push(created["slug"].as_str().unwrap().to_string());
    }

    assert_eq!(slugs[0], "a".repeat(200));
    assert_eq!(slugs[1], format!("{}-1", "a".repeat(198)));
    assert_eq!(slugs[2], format!("{}-2", "a".repeat(198)));
    assert_eq!(slugs[3], format!("{}-3", "a".repeat(198)));
    assert!(slugs.iter().all(|slug| slug.len() <= 200));
}

#[tokio::test]
async fn test_project_slug_survives_title_change() {
    let db = setup_test_db().await;
    create_admin(&db.pool).await;
    let app = create_test_app(test_config(), db.pool.clone());
    let cookie = login_admin(&app).await;

    let (_, created) = post(&app, "/admin/api/projects", project("Boiler Frame"), &cookie).await;
    let uri = format!("/admin/api/projects/{}", created["id"]);

    let response = app
        .oneshot(json_request_with_cookie(
            Method::PUT,
            &uri,
            json!({"title": "Pressure Vessel Frame"}),
            &cookie,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = parse_response_body(response).await;
    assert_eq!(updated["title"], "Pressure Vessel Frame");
    assert_eq!(updated["slug"], "boiler-frame");
}

#[tokio::test]
async fn test_service_slug_derived_from_title() {
    let db = setup_test_db().await;
    create_admin(&db.pool).await;
    let app = create_test_app(test_config(), db.pool.clone());
    let cookie = login_admin(&app).await;

    let (status, service) = post(
        &app,
        "/admin/api/services",
        json!({"title": "CNC Machining", "description": "Precision parts"}),
        &cookie,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(service["slug"], "cnc-machining");
    assert_eq!(service["icon"], "🔧");
}

#[tokio::test]
async fn test_duplicate_service_slug_conflicts() {
    let db = setup_test_db().await;
    create_admin(&db.pool).await;
    let app = create_test_app(test_config(), db.pool.clone());
    let cookie = login_admin(&app).await;

    let body = json!({"title": "Welding", "description": "MIG and TIG", "slug": "welding"});
    let (status, _) = post(&app, "/admin/api/services", body.clone(), &cookie).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, error) = post(&app, "/admin/api/services", body, &cookie).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["error"], "conflict");
    assert!(error["message"].as_str().unwrap().contains("welding"));
}

#[tokio::test]
async fn test_title_without_slug_characters_is_rejected() {
    let db = setup_test_db().await;
    create_admin(&db.pool).await;
    let app = create_test_app(test_config(), db.pool.clone());
    let cookie = login_admin(&app).await;

    let (status, error) = post(&app, "/admin/api/projects", project("!!!"), &cookie).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "validation_error");
}
