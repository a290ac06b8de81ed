//! Project entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const PROJECT_COLUMNS: &str = "id, title, category, short_description, full_description, \
    image_url, image_file, client_name, completion_date, location, slug, is_featured, \
    is_active, display_order, created_at, updated_at";

/// Database row mapping for the projects table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectEntity {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub short_description: String,
    pub full_description: String,
    pub image_url: String,
    pub image_file: Option<String>,
    pub client_name: String,
    pub completion_date: String,
    pub location: String,
    pub slug: String,
    pub is_featured: bool,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProjectEntity> for domain::models::Project {
    fn from(entity: ProjectEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            category: entity.category,
            short_description: entity.short_description,
            full_description: entity.full_description,
            image_url: entity.image_url,
            image_file: entity.image_file,
            client_name: entity.client_name,
            completion_date: entity.completion_date,
            location: entity.location,
            slug: entity.slug,
            is_featured: entity.is_featured,
            is_active: entity.is_active,
            display_order: entity.display_order,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
