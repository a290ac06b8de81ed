//! Service entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const SERVICE_COLUMNS: &str =
    "id, title, icon, description, slug, is_active, display_order, created_at, updated_at";

/// Database row mapping for the services table.
#[derive(Debug, Clone, FromRow)]
pub struct ServiceEntity {
    pub id: i64,
    pub title: String,
    pub icon: String,
    pub description: String,
    pub slug: String,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ServiceEntity> for domain::models::Service {
    fn from(entity: ServiceEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            icon: entity.icon,
            description: entity.description,
            slug: entity.slug,
            is_active: entity.is_active,
            display_order: entity.display_order,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
