//! Admin user and session entities (database row mappings).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the admin_users table.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUserEntity {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<AdminUserEntity> for domain::models::AdminUser {
    fn from(entity: AdminUserEntity) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password_hash,
            is_active: entity.is_active,
            created_at: entity.created_at,
            last_login_at: entity.last_login_at,
        }
    }
}

/// A session joined with its owner's username.
#[derive(Debug, Clone, FromRow)]
pub struct AdminSessionEntity {
    pub id: Uuid,
    pub admin_user_id: i64,
    pub username: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<AdminSessionEntity> for domain::models::AdminSession {
    fn from(entity: AdminSessionEntity) -> Self {
        Self {
            id: entity.id,
            admin_user_id: entity.admin_user_id,
            username: entity.username,
            expires_at: entity.expires_at,
            created_at: entity.created_at,
        }
    }
}
