//! Gallery item entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::gallery::{GalleryCategory, MediaType};
use sqlx::FromRow;

pub const GALLERY_COLUMNS: &str = "id, title, description, media_type, category, media_url, \
    media_file, thumbnail_url, thumbnail_file, is_featured, is_active, display_order, \
    created_at, updated_at";

/// Database enum for gallery_media_type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "gallery_media_type", rename_all = "lowercase")]
pub enum MediaTypeDb {
    Image,
    Video,
}

impl From<MediaTypeDb> for MediaType {
    fn from(db: MediaTypeDb) -> Self {
        match db {
            MediaTypeDb::Image => MediaType::Image,
            MediaTypeDb::Video => MediaType::Video,
        }
    }
}

impl From<MediaType> for MediaTypeDb {
    fn from(media_type: MediaType) -> Self {
        match media_type {
            MediaType::Image => MediaTypeDb::Image,
            MediaType::Video => MediaTypeDb::Video,
        }
    }
}

/// Database enum for gallery_category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "gallery_category", rename_all = "lowercase")]
pub enum GalleryCategoryDb {
    Workshop,
    Fabrication,
    Welding,
    Machinery,
    Projects,
    Assembly,
    Testing,
    Installation,
    Other,
}

impl From<GalleryCategoryDb> for GalleryCategory {
    fn from(db: GalleryCategoryDb) -> Self {
        match db {
            GalleryCategoryDb::Workshop => GalleryCategory::Workshop,
            GalleryCategoryDb::Fabrication => GalleryCategory::Fabrication,
            GalleryCategoryDb::Welding => GalleryCategory::Welding,
            GalleryCategoryDb::Machinery => GalleryCategory::Machinery,
            GalleryCategoryDb::Projects => GalleryCategory::Projects,
            GalleryCategoryDb::Assembly => GalleryCategory::Assembly,
            GalleryCategoryDb::Testing => GalleryCategory::Testing,
            GalleryCategoryDb::Installation => GalleryCategory::Installation,
            GalleryCategoryDb::Other => GalleryCategory::Other,
        }
    }
}

impl From<GalleryCategory> for GalleryCategoryDb {
    fn from(category: GalleryCategory) -> Self {
        match category {
            GalleryCategory::Workshop => GalleryCategoryDb::Workshop,
            GalleryCategory::Fabrication => GalleryCategoryDb::Fabrication,
            GalleryCategory::Welding => GalleryCategoryDb::Welding,
            GalleryCategory::Machinery => GalleryCategoryDb::Machinery,
            GalleryCategory::Projects => GalleryCategoryDb::Projects,
            GalleryCategory::Assembly => GalleryCategoryDb::Assembly,
            GalleryCategory::Testing => GalleryCategoryDb::Testing,
            GalleryCategory::Installation => GalleryCategoryDb::Installation,
            GalleryCategory::Other => GalleryCategoryDb::Other,
        }
    }
}

/// Database row mapping for the gallery_items table.
#[derive(Debug, Clone, FromRow)]
pub struct GalleryItemEntity {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub media_type: MediaTypeDb,
    pub category: GalleryCategoryDb,
    pub media_url: String,
    pub media_file: Option<String>,
    pub thumbnail_url: String,
    pub thumbnail_file: Option<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<GalleryItemEntity> for domain::models::GalleryItem {
    fn from(entity: GalleryItemEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            media_type: entity.media_type.into(),
            category: entity.category.into(),
            media_url: entity.media_url,
            media_file: entity.media_file,
            thumbnail_url: entity.thumbnail_url,
            thumbnail_file: entity.thumbnail_file,
            is_featured: entity.is_featured,
            is_active: entity.is_active,
            display_order: entity.display_order,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
