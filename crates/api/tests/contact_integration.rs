//! Integration tests for the contact form and JSON endpoints.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{
    body_text, create_test_app, form_request, json_request, lazy_pool, location,
    parse_response_body, set_cookies, setup_test_db, test_config,
};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use mechfab_api::services::Flash;
use persistence::repositories::ContactSubmissionRepository;
use serde_json::json;
use tower::ServiceExt;

const MSG_SUCCESS: &str = "Thank you for your message! We will get back to you soon.";
const MSG_REQUIRED: &str = "All fields are required.";
const MSG_FAILED: &str = "Sorry, there was an error sending your message. Please try again.";
const MSG_INVALID: &str = "Invalid request format.";

/// Decodes the flash cookie set on a redirect.
fn flash_from(response: &axum::response::Response) -> Flash {
    let cookie = set_cookies(response)
        .into_iter()
        .find(|c| c.starts_with("mechfab_flash="))
        .expect("flash cookie");
    let value = cookie
        .trim_start_matches("mechfab_flash=")
        .split(';')
        .next()
        .unwrap()
        .to_string();
    Flash::decode(&value).expect("decodable flash")
}

fn raw_json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/contact/ajax/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ============================================================================
// Requests that never reach the store
// ============================================================================

#[tokio::test]
async fn test_json_malformed_body() {
    let app = create_test_app(test_config(), lazy_pool());

    for body in ["{not json", "[1, 2]", "\"text\"", r#"{"name": 5}"#] {
        let response = app.clone().oneshot(raw_json_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "body {}", body);

        let json = parse_response_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], MSG_INVALID);
    }
}

#[tokio::test]
async fn test_json_missing_fields() {
    let app = create_test_app(test_config(), lazy_pool());

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/contact/ajax/",
            json!({"name": "Asha", "email": "  ", "subject": "Quote"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = parse_response_body(response).await;
    assert_eq!(json, json!({"success": false, "message": MSG_REQUIRED}));
}

#[tokio::test]
async fn test_json_store_failure_is_reported_not_raised() {
    let app = create_test_app(test_config(), lazy_pool());

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/contact/ajax/",
            json!({
                "name": "Asha",
                "email": "asha@example.com",
                "subject": "Quote",
                "message": "Need a conveyor frame."
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = parse_response_body(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], MSG_FAILED);
}

#[tokio::test]
async fn test_form_missing_fields_redirects_with_flash() {
    let app = create_test_app(test_config(), lazy_pool());

    let response = app
        .oneshot(form_request("/contact/submit/", "name=Asha&email=&subject=Hi&message="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/");

    let flash = flash_from(&response);
    assert_eq!(flash, Flash::error(MSG_REQUIRED));

    let cookie = set_cookies(&response).join("\n");
    assert!(cookie.contains("Max-Age=60"));
    assert!(cookie.contains("Path=/;"));
}

#[tokio::test]
async fn test_form_with_wrong_content_type_gets_generic_flash() {
    let app = create_test_app(test_config(), lazy_pool());

    let response = app
        .oneshot(json_request(Method::POST, "/contact/submit/", json!({"name": "x"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(flash_from(&response), Flash::error(MSG_FAILED));
}

#[tokio::test]
async fn test_rate_limit_per_client() {
    let mut config = test_config();
    config.security.contact_rate_limit_per_minute = 1;
    let app = create_test_app(config, lazy_pool());

    let first = app.clone().oneshot(raw_json_request("{}")).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.clone().oneshot(raw_json_request("{}")).await.unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(second.headers().get(header::RETRY_AFTER).is_some());
    let json = parse_response_body(second).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Too many submissions. Please try again later.");

    let form = app
        .oneshot(form_request("/contact/submit/", "name=a&email=b&subject=c&message=d"))
        .await
        .unwrap();
    assert_eq!(form.status(), StatusCode::FOUND);
    assert_eq!(flash_from(&form), Flash::error(MSG_FAILED));
}

// ============================================================================
// Stored submissions (database)
// ============================================================================

#[tokio::test]
async fn test_form_submission_is_stored_trimmed() {
    let db = setup_test_db().await;
    let app = create_test_app(test_config(), db.pool.clone());

    let response = app
        .oneshot(form_request(
            "/contact/submit/",
            "name=+Asha+Patel+&email=asha%40example.com&subject=Quote&message=Need+a+frame.",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/");
    assert_eq!(flash_from(&response), Flash::success(MSG_SUCCESS));

    let repo = ContactSubmissionRepository::new(db.pool.clone());
    let rows = repo.list_page(None, 10, None).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Asha Patel");
    assert_eq!(rows[0].email, "asha@example.com");
    assert!(rows[0].ip_address.is_none());
}

#[tokio::test]
async fn test_json_submission_is_stored() {
    let db = setup_test_db().await;
    let app = create_test_app(test_config(), db.pool.clone());

    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/contact/ajax/")
                .header(header::USER_AGENT, "integration-test/1.0")
                .body(Body::from(
                    json!({
                        "name": name,
                        "email": email,
                        "subject": "Fabrication quote",
                        "message": "Please call me back."
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = parse_response_body(response).await;
    assert_eq!(json, json!({"success": true, "message": MSG_SUCCESS}));

    let repo = ContactSubmissionRepository::new(db.pool.clone());
    let rows = repo.list_page(None, 10, None).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, name);
    assert_eq!(rows[0].user_agent, "integration-test/1.0");
    let status: String = sqlx::query_scalar("SELECT status::TEXT FROM contact_submissions")
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(status, "new");
}

#[tokio::test]
async fn test_home_page_shows_and_clears_flash() {
    let db = setup_test_db().await;
    let app = create_test_app(test_config(), db.pool.clone());

    let flash = Flash::success(MSG_SUCCESS);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, format!("mechfab_flash={}", flash.encode()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookies(&response)
        .iter()
        .any(|c| c.starts_with("mechfab_flash=;") && c.contains("Max-Age=0")));
    let html = body_text(response).await;
    assert!(html.contains("notification--success"));
    assert!(html.contains("Thank you for your message!"));
}
