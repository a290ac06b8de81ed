//! Gallery item repository.

use domain::errors::ContentError;
use domain::models::gallery::{CreateGalleryItemRequest, UpdateGalleryItemRequest};
use domain::models::media::normalize_file_ref;
use domain::services::Listing;
use sqlx::PgPool;

use crate::entities::gallery::GALLERY_COLUMNS;
use crate::entities::{GalleryCategoryDb, GalleryItemEntity, MediaTypeDb};
use crate::metrics::QueryTimer;

/// Repository for the gallery_items table.
#[derive(Clone)]
pub struct GalleryRepository {
    pool: PgPool,
}

impl GalleryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Active items ordered by `(display_order, created_at DESC, id DESC)`.
    pub async fn list_public(&self, listing: Listing) -> Result<Vec<GalleryItemEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_public_gallery_items");
        let sql = format!(
            r#"
            SELECT {}
            FROM gallery_items
            WHERE is_active = true
              AND (is_featured = true OR NOT $1)
            ORDER BY display_order ASC, created_at DESC, id DESC
            LIMIT $2
            "#,
            GALLERY_COLUMNS
        );
        let result = sqlx::query_as::<_, GalleryItemEntity>(&sql)
            .bind(listing.featured_only)
            .bind(listing.sql_limit())
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn list_all(&self) -> Result<Vec<GalleryItemEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_all_gallery_items");
        let sql = format!(
            "SELECT {} FROM gallery_items ORDER BY display_order ASC, created_at DESC, id DESC",
            GALLERY_COLUMNS
        );
        let result = sqlx::query_as::<_, GalleryItemEntity>(&sql)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<GalleryItemEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_gallery_item_by_id");
        let sql = format!("SELECT {} FROM gallery_items WHERE id = $1", GALLERY_COLUMNS);
        let result = sqlx::query_as::<_, GalleryItemEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM gallery_items")
            .fetch_one(&self.pool)
            .await
    }

    pub async fn create(
        &self,
        req: &CreateGalleryItemRequest,
    ) -> Result<GalleryItemEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_gallery_item");
        let sql = format!(
            r#"
            INSERT INTO gallery_items (
                title, description, media_type, category, media_url, media_file,
                thumbnail_url, thumbnail_file, is_featured, is_active, display_order
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {}
            "#,
            GALLERY_COLUMNS
        );
        let result = sqlx::query_as::<_, GalleryItemEntity>(&sql)
            .bind(&req.title)
            .bind(&req.description)
            .bind(MediaTypeDb::from(req.media_type))
            .bind(GalleryCategoryDb::from(req.category))
            .bind(req.media_url.trim())
            .bind(normalize_file_ref(req.media_file.clone()))
            .bind(req.thumbnail_url.trim())
            .bind(normalize_file_ref(req.thumbnail_file.clone()))
            .bind(req.is_featured)
            .bind(req.is_active)
            .bind(req.display_order)
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Updates an item. Empty file references clear the stored upload.
    pub async fn update(
        &self,
        id: i64,
        req: &UpdateGalleryItemRequest,
    ) -> Result<GalleryItemEntity, ContentError> {
        let timer = QueryTimer::new("update_gallery_item");
        let sql = format!(
            r#"
            UPDATE gallery_items
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                media_type = COALESCE($4, media_type),
                category = COALESCE($5, category),
                media_url = COALESCE($6, media_url),
                media_file = CASE WHEN $7::TEXT IS NULL THEN media_file
                                  ELSE NULLIF($7, '') END,
                thumbnail_url = COALESCE($8, thumbnail_url),
                thumbnail_file = CASE WHEN $9::TEXT IS NULL THEN thumbnail_file
                                      ELSE NULLIF($9, '') END,
                is_featured = COALESCE($10, is_featured),
                is_active = COALESCE($11, is_active),
                display_order = COALESCE($12, display_order),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            GALLERY_COLUMNS
        );
        let result = sqlx::query_as::<_, GalleryItemEntity>(&sql)
            .bind(id)
            .bind(req.title.as_deref())
            .bind(req.description.as_deref())
            .bind(req.media_type.map(MediaTypeDb::from))
            .bind(req.category.map(GalleryCategoryDb::from))
            .bind(req.media_url.as_deref().map(str::trim))
            .bind(req.media_file.as_deref().map(str::trim))
            .bind(req.thumbnail_url.as_deref().map(str::trim))
            .bind(req.thumbnail_file.as_deref().map(str::trim))
            .bind(req.is_featured)
            .bind(req.is_active)
            .bind(req.display_order)
            .fetch_optional(&self.pool)
            .await;
        timer.record();

        result?.ok_or_else(|| ContentError::NotFound(format!("Gallery item {} not found", id)))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ContentError> {
        let timer = QueryTimer::new("delete_gallery_item");
        let result = sqlx::query("DELETE FROM gallery_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();

        if result?.rows_affected() == 0 {
            return Err(ContentError::NotFound(format!("Gallery item {} not found", id)));
        }
        Ok(())
    }
}
