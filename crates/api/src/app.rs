use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Config;
use crate::middleware::{
    admin_audit_middleware, metrics_handler, metrics_middleware, require_admin,
    security_headers_middleware, trace_id, RateLimiterState, SecurityPolicy,
};
use crate::routes::{
    admin_about, admin_contact_info, admin_gallery, admin_media, admin_projects, admin_services,
    admin_session, admin_submissions, assets, contact, health, pages,
};
use crate::services::{LocalMediaStorage, MediaStorage};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    /// Per-IP limiter for the contact endpoints; `None` when disabled.
    pub contact_limiter: Option<Arc<RateLimiterState>>,
    pub media: Arc<dyn MediaStorage>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    let contact_limiter =
        RateLimiterState::new(config.security.contact_rate_limit_per_minute).map(Arc::new);
    let media: Arc<dyn MediaStorage> = Arc::new(LocalMediaStorage::new(
        &config.media.root,
        &config.media.url_prefix,
    ));

    let state = AppState {
        pool,
        config: config.clone(),
        contact_limiter,
        media,
    };

    let security_policy = Arc::new(SecurityPolicy {
        admin_prefix: config.admin.path_prefix.clone(),
        hsts_enabled: config.security.hsts_enabled,
    });

    let prefix = config.admin.path_prefix.as_str();
    let api = format!("{}/api", prefix);

    // Everything under the admin prefix except the login form
    let protected_admin_routes = Router::new()
        .route(prefix, get(admin_session::landing))
        .route(&format!("{}/", prefix), get(admin_session::landing))
        .route(&format!("{}/logout/", prefix), post(admin_session::logout))
        .nest(&format!("{}/about", api), admin_about::router())
        .nest(&format!("{}/contact-info", api), admin_contact_info::router())
        .nest(&format!("{}/services", api), admin_services::router())
        .nest(&format!("{}/projects", api), admin_projects::router())
        .nest(&format!("{}/gallery", api), admin_gallery::router())
        .nest(&format!("{}/submissions", api), admin_submissions::router())
        .nest(
            &format!("{}/media", api),
            admin_media::router(config.media.max_upload_bytes),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    // Audit wraps authentication so it sees the login redirects
    let admin_routes = Router::new()
        .route(
            &format!("{}/login/", prefix),
            get(admin_session::login_form).post(admin_session::login),
        )
        .merge(protected_admin_routes)
        .layer(middleware::from_fn(admin_audit_middleware));

    let public_routes = Router::new()
        .route("/", get(pages::home))
        .route("/gallery/", get(pages::gallery))
        .route("/projects/", get(pages::projects))
        .route("/contact/submit/", post(contact::submit_form))
        .route("/contact/ajax/", post(contact::submit_json))
        .route("/static/*path", get(assets::static_asset))
        .route(
            &format!("{}/*path", config.media.url_prefix.trim_end_matches('/')),
            get(assets::media_file),
        );

    let ops_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .merge(ops_routes)
        .fallback(pages::not_found)
        // Global middleware (order matters: bottom layers run first)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(middleware::from_fn_with_state(
            security_policy,
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .with_state(state)
}
