//! Integration tests for the public pages.

mod common;

use axum::http::{header, StatusCode};
use common::{body_text, create_test_app, get_request, lazy_pool, setup_test_db, test_config};
use domain::services::{Listing, HOMEPAGE_FEATURED_GALLERY, HOMEPAGE_FEATURED_PROJECTS};
use persistence::repositories::{GalleryRepository, ProjectRepository};
use sqlx::PgPool;
use tower::ServiceExt;

async fn insert_project(pool: &PgPool, title: &str, slug: &str, featured: bool, order: i32) {
    sqlx::query(
        r#"
        INSERT INTO projects
            (title, category, short_description, full_description, slug, is_featured, display_order)
        VALUES ($1, 'Industrial', 'Short', 'Full', $2, $3, $4)
        "#,
    )
    .bind(title)
    .bind(slug)
    .bind(featured)
    .bind(order)
    .execute(pool)
    .await
    .unwrap();
}

async fn insert_gallery_item(pool: &PgPool, title: &str, featured: bool, active: bool) {
    sqlx::query(
        r#"
        INSERT INTO gallery_items (title, description, media_url, is_featured, is_active)
        VALUES ($1, 'Shop floor', 'https://cdn.example.com/a.jpg', $2, $3)
        "#,
    )
    .bind(title)
    .bind(featured)
    .bind(active)
    .execute(pool)
    .await
    .unwrap();
}

#[tokio::test]
async fn test_home_page_with_empty_store() {
    let db = setup_test_db().await;
    let app = create_test_app(test_config(), db.pool.clone());

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains("Mechfab Test"));
    assert!(html.contains("Our Services"));
    assert!(!html.contains("about__description"));
    assert!(html.contains(r#"action="/contact/submit/""#));
}

#[tokio::test]
async fn test_home_page_shows_active_singletons_and_services() {
    let db = setup_test_db().await;
    sqlx::query(
        r#"
        INSERT INTO about_sections
            (subtitle, title, description, feature_1_title, feature_1_description,
             feature_2_title, feature_2_description, feature_3_title, feature_3_description)
        VALUES ('About', 'Built to last', 'Twenty years of steel.', 'A', 'a', 'B', 'b', 'C', 'c')
        "#,
    )
    .execute(&db.pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO contact_infos (company_name, tagline) VALUES ('Acme Fabrication', 'Steel you can trust')")
        .execute(&db.pool)
        .await
        .unwrap();
    sqlx::query(
        r#"
        INSERT INTO services (title, description, slug, display_order, is_active) VALUES
            ('Welding', 'MIG and TIG', 'welding', 2, TRUE),
            ('Cutting', 'Plasma cutting', 'cutting', 1, TRUE),
            ('Painting', 'Retired', 'painting', 0, FALSE)
        "#,
    )
    .execute(&db.pool)
    .await
    .unwrap();

    let app = create_test_app(test_config(), db.pool.clone());
    let html = body_text(app.oneshot(get_request("/")).await.unwrap()).await;

    assert!(html.contains("Acme Fabrication"));
    assert!(html.contains("Steel you can trust"));
    assert!(html.contains("Twenty years of steel."));

    let cutting = html.find("service-cutting").unwrap();
    let welding = html.find("service-welding").unwrap();
    assert!(cutting < welding);
    assert!(!html.contains("service-painting"));
}

#[tokio::test]
async fn test_home_page_limits_featured_items() {
    let db = setup_test_db().await;
    for (i, slug) in ["p-one", "p-two", "p-three", "p-four"].iter().enumerate() {
        insert_project(&db.pool, slug, slug, true, i as i32).await;
    }
    insert_project(&db.pool, "Plain", "p-plain", false, 0).await;
    for title in ["G1", "G2", "G3"] {
        insert_gallery_item(&db.pool, title, true, true).await;
    }

    let app = create_test_app(test_config(), db.pool.clone());
    let html = body_text(app.oneshot(get_request("/")).await.unwrap()).await;

    assert!(html.contains("project-p-one"));
    assert!(html.contains("project-p-three"));
    assert!(!html.contains("project-p-four"));
    assert!(!html.contains("project-p-plain"));
    assert_eq!(html.matches("gallery__item").count(), 2);
}

#[tokio::test]
async fn test_gallery_page_lists_active_items() {
    let db = setup_test_db().await;
    insert_gallery_item(&db.pool, "Lathe", false, true).await;
    insert_gallery_item(&db.pool, "Hidden", true, false).await;

    let app = create_test_app(test_config(), db.pool.clone());
    let response = app.oneshot(get_request("/gallery/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Lathe"));
    assert!(!html.contains("Hidden"));
    assert!(html.contains(r#"data-filter="all""#));
}

#[tokio::test]
async fn test_projects_page_lists_all_active_projects() {
    let db = setup_test_db().await;
    insert_project(&db.pool, "Second", "second", false, 2).await;
    insert_project(&db.pool, "First", "first", true, 1).await;

    let app = create_test_app(test_config(), db.pool.clone());
    let response = app.oneshot(get_request("/projects/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    let first = html.find("project-first").unwrap();
    let second = html.find("project-second").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn test_empty_listing_pages() {
    let db = setup_test_db().await;
    let app = create_test_app(test_config(), db.pool.clone());

    let html = body_text(app.clone().oneshot(get_request("/gallery/")).await.unwrap()).await;
    assert!(html.contains("No gallery items yet."));
    let html = body_text(app.oneshot(get_request("/projects/")).await.unwrap()).await;
    assert!(html.contains("No projects yet."));
}

#[tokio::test]
async fn test_store_failure_renders_error_page() {
    let app = create_test_app(test_config(), lazy_pool());

    let response = app.oneshot(get_request("/projects/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = body_text(response).await;
    assert!(html.contains("Something went wrong on our side."));
}

#[tokio::test]
async fn test_unknown_path_renders_not_found_page() {
    let app = create_test_app(test_config(), lazy_pool());

    let response = app.oneshot(get_request("/no-such-page/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains("The page you are looking for does not exist."));
}

#[tokio::test]
async fn test_equal_rank_ties_break_by_newest_id() {
    let db = setup_test_db().await;
    // One statement, so every row shares the same NOW().
    let ids: Vec<i64> = sqlx::query_scalar(
        r#"
        INSERT INTO projects
            (title, category, short_description, full_description, slug, display_order)
        VALUES
            ('Tie A', 'Industrial', 'Short', 'Full', 'tie-a', 1),
            ('Tie B', 'Industrial', 'Short', 'Full', 'tie-b', 1),
            ('Tie C', 'Industrial', 'Short', 'Full', 'tie-c', 1),
            ('First', 'Industrial', 'Short', 'Full', 'first', 0)
        RETURNING id
        "#,
    )
    .fetch_all(&db.pool)
    .await
    .unwrap();

    let projects = ProjectRepository::new(db.pool.clone())
        .list_public(Listing::all())
        .await
        .unwrap();
    let listed: Vec<i64> = projects.iter().map(|p| p.id).collect();
    assert_eq!(listed, vec![ids[3], ids[2], ids[1], ids[0]]);

    let gallery_ids: Vec<i64> = sqlx::query_scalar(
        r#"
        INSERT INTO gallery_items (title, description, media_url, display_order) VALUES
            ('Weld bay', 'Shop floor', 'https://cdn.example.com/a.jpg', 0),
            ('Paint booth', 'Shop floor', 'https://cdn.example.com/b.jpg', 0)
        RETURNING id
        "#,
    )
    .fetch_all(&db.pool)
    .await
    .unwrap();

    let gallery = GalleryRepository::new(db.pool.clone())
        .list_all()
        .await
        .unwrap();
    let listed: Vec<i64> = gallery.iter().map(|g| g.id).collect();
    assert_eq!(listed, vec![gallery_ids[1], gallery_ids[0]]);
}

#[tokio::test]
async fn test_homepage_listings_are_prefixes_of_featured_listings() {
    let db = setup_test_db().await;
    sqlx::query(
        r#"
        INSERT INTO projects
            (title, category, short_description, full_description, slug, is_featured, display_order)
        VALUES
            ('P1', 'Industrial', 'Short', 'Full', 'p1', TRUE, 2),
            ('P2', 'Industrial', 'Short', 'Full', 'p2', TRUE, 0),
            ('P3', 'Industrial', 'Short', 'Full', 'p3', FALSE, 0),
            ('P4', 'Industrial', 'Short', 'Full', 'p4', TRUE, 1),
            ('P5', 'Industrial', 'Short', 'Full', 'p5', TRUE, 1),
            ('P6', 'Industrial', 'Short', 'Full', 'p6', TRUE, 5)
        "#,
    )
    .execute(&db.pool)
    .await
    .unwrap();
    sqlx::query(
        r#"
        INSERT INTO gallery_items (title, description, media_url, is_featured, display_order) VALUES
            ('G1', 'Shop floor', 'https://cdn.example.com/1.jpg', TRUE, 3),
            ('G2', 'Shop floor', 'https://cdn.example.com/2.jpg', FALSE, 0),
            ('G3', 'Shop floor', 'https://cdn.example.com/3.jpg', TRUE, 1),
            ('G4', 'Shop floor', 'https://cdn.example.com/4.jpg', TRUE, 1)
        "#,
    )
    .execute(&db.pool)
    .await
    .unwrap();

    let projects = ProjectRepository::new(db.pool.clone());
    let all: Vec<String> = projects
        .list_public(Listing::featured(None))
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.slug)
        .collect();
    let top: Vec<String> = projects
        .list_public(Listing::featured(Some(HOMEPAGE_FEATURED_PROJECTS)))
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.slug)
        .collect();
    assert_eq!(all.len(), 5);
    assert!(!all.contains(&"p3".to_string()));
    assert_eq!(top, all[..3].to_vec());

    let gallery = GalleryRepository::new(db.pool.clone());
    let all: Vec<String> = gallery
        .list_public(Listing::featured(None))
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.title)
        .collect();
    let top: Vec<String> = gallery
        .list_public(Listing::featured(Some(HOMEPAGE_FEATURED_GALLERY)))
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.title)
        .collect();
    assert_eq!(all.len(), 3);
    assert_eq!(top, all[..2].to_vec());
}
