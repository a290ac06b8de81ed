//! About section entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Column list shared by every about_sections query.
pub const ABOUT_COLUMNS: &str = "id, subtitle, title, description, \
    feature_1_title, feature_1_description, feature_2_title, feature_2_description, \
    feature_3_title, feature_3_description, is_active, created_at, updated_at";

/// Database row mapping for the about_sections table.
#[derive(Debug, Clone, FromRow)]
pub struct AboutSectionEntity {
    pub id: i64,
    pub subtitle: String,
    pub title: String,
    pub description: String,
    pub feature_1_title: String,
    pub feature_1_description: String,
    pub feature_2_title: String,
    pub feature_2_description: String,
    pub feature_3_title: String,
    pub feature_3_description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AboutSectionEntity> for domain::models::AboutSection {
    fn from(entity: AboutSectionEntity) -> Self {
        Self {
            id: entity.id,
            subtitle: entity.subtitle,
            title: entity.title,
            description: entity.description,
            feature_1_title: entity.feature_1_title,
            feature_1_description: entity.feature_1_description,
            feature_2_title: entity.feature_2_title,
            feature_2_description: entity.feature_2_description,
            feature_3_title: entity.feature_3_title,
            feature_3_description: entity.feature_3_description,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
