//! Repository for admin accounts and their sessions.

use chrono::{DateTime, Utc};
use domain::errors::ContentError;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{AdminSessionEntity, AdminUserEntity};
use crate::metrics::QueryTimer;

/// Repository for admin user and session operations.
#[derive(Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Finds an admin account by username.
    pub async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminUserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_admin_user_by_username");
        let result = sqlx::query_as::<_, AdminUserEntity>(
            r#"
            SELECT id, username, password_hash, is_active, created_at, last_login_at
            FROM admin_users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Creates an admin account from an already hashed password.
    pub async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminUserEntity, ContentError> {
        let timer = QueryTimer::new("create_admin_user");
        let result = sqlx::query_as::<_, AdminUserEntity>(
            r#"
            INSERT INTO admin_users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash, is_active, created_at, last_login_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await;
        timer.record();

        result.map_err(|e| {
            ContentError::from_unique(e, format!("Admin user '{}' already exists", username))
        })
    }

    pub async fn touch_last_login(&self, user_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE admin_users SET last_login_at = NOW() WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Stores a session. Only the SHA-256 of the cookie token is persisted.
    pub async fn create_session(
        &self,
        user_id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<Uuid, sqlx::Error> {
        let timer = QueryTimer::new("create_admin_session");
        let id = Uuid::new_v4();
        let result = sqlx::query(
            r#"
            INSERT INTO admin_sessions (id, admin_user_id, token_hash, expires_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(token_hash)
        .bind(expires_at)
        .execute(&self.pool)
        .await;
        timer.record();
        result.map(|_| id)
    }

    /// Finds an unexpired session whose owner is still active.
    pub async fn find_valid_session(
        &self,
        token_hash: &str,
    ) -> Result<Option<AdminSessionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_admin_session");
        let result = sqlx::query_as::<_, AdminSessionEntity>(
            r#"
            SELECT s.id, s.admin_user_id, u.username, s.expires_at, s.created_at
            FROM admin_sessions s
            JOIN admin_users u ON u.id = s.admin_user_id
            WHERE s.token_hash = $1
              AND s.expires_at > NOW()
              AND u.is_active = true
            "#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete_session(&self, token_hash: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE token_hash = $1")
            .bind(token_hash)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Removes expired sessions and returns how many were deleted.
    pub async fn purge_expired_sessions(&self) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("purge_expired_admin_sessions");
        let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected())
    }
}
