use anyhow::Result;
use std::net::SocketAddr;
use tracing::{info, warn};

use mechfab_api::services::admin_bootstrap::BootstrapOutcome;
use mechfab_api::{app, config, middleware, services};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging);
    middleware::init_metrics()?;

    info!("Starting Mechfab site v{}", env!("CARGO_PKG_VERSION"));

    let db_config: persistence::db::DatabaseConfig = (&config.database).into();
    let pool = persistence::db::create_pool(&db_config).await?;

    info!("Running database migrations...");
    persistence::db::run_migrations(&pool).await?;
    info!("Migrations completed");

    match services::bootstrap_admin(&pool, &config.admin).await? {
        BootstrapOutcome::Created => info!(
            username = %config.admin.bootstrap_username,
            "Created bootstrap admin account"
        ),
        BootstrapOutcome::AlreadyExists => {}
        BootstrapOutcome::NotConfigured => {
            warn!("No bootstrap admin configured; the admin area is unreachable until one exists")
        }
    }

    if config.seed.enabled {
        let report = services::seed_content(&pool).await?;
        info!(?report, "Seed content applied");
    }

    let app = app::create_app(config.clone(), pool);

    let addr = config.socket_addr()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
