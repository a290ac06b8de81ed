//! Creates the first admin account on startup.

use domain::errors::ContentError;
use persistence::repositories::AdminRepository;
use shared::password::{hash_password, PasswordError};
use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::AdminConfig;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to create admin user: {0}")]
    Content(#[from] ContentError),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] PasswordError),
}

/// Outcome of [`bootstrap_admin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    NotConfigured,
    AlreadyExists,
    Created,
}

/// Creates `admin.bootstrap_username` unless it already exists.
///
/// Idempotent; run after migrations.
pub async fn bootstrap_admin(
    pool: &PgPool,
    config: &AdminConfig,
) -> Result<BootstrapOutcome, BootstrapError> {
    let username = config.bootstrap_username.trim();
    if username.is_empty() {
        return Ok(BootstrapOutcome::NotConfigured);
    }

    if config.bootstrap_password.is_empty() {
        warn!(
            "MECHFAB__ADMIN__BOOTSTRAP_USERNAME is set but MECHFAB__ADMIN__BOOTSTRAP_PASSWORD is empty - skipping bootstrap"
        );
        return Ok(BootstrapOutcome::NotConfigured);
    }

    let repo = AdminRepository::new(pool.clone());
    if repo.find_user_by_username(username).await?.is_some() {
        info!(username = %username, "Bootstrap admin already exists - skipping");
        return Ok(BootstrapOutcome::AlreadyExists);
    }

    let password_hash = hash_password(&config.bootstrap_password)?;

    let user = match repo.create_user(username, &password_hash).await {
        Ok(user) => user,
        // Another instance won the race.
        Err(ContentError::UniquenessViolation(_)) => return Ok(BootstrapOutcome::AlreadyExists),
        Err(e) => return Err(e.into()),
    };

    info!(username = %user.username, user_id = user.id, "Bootstrap admin user created");
    warn!(
        "SECURITY: Remove MECHFAB__ADMIN__BOOTSTRAP_PASSWORD from configuration after initial setup"
    );

    Ok(BootstrapOutcome::Created)
}
