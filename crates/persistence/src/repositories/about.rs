//! About section repository.

use domain::errors::ContentError;
use domain::models::about::{CreateAboutRequest, UpdateAboutRequest};
use domain::services::SingletonKind;
use sqlx::PgPool;

use super::singleton;
use crate::entities::about::ABOUT_COLUMNS;
use crate::entities::AboutSectionEntity;
use crate::metrics::QueryTimer;

const KIND: SingletonKind = SingletonKind::About;

/// Repository for the about_sections table.
#[derive(Clone)]
pub struct AboutRepository {
    pool: PgPool,
}

impl AboutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// The section to display: the active one, else the most recently updated.
    pub async fn find_active(&self) -> Result<Option<AboutSectionEntity>, sqlx::Error> {
        singleton::find_active(&self.pool, KIND, ABOUT_COLUMNS).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<AboutSectionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_about_by_id");
        let sql = format!("SELECT {} FROM about_sections WHERE id = $1", ABOUT_COLUMNS);
        let result = sqlx::query_as::<_, AboutSectionEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// All sections, most recently updated first.
    pub async fn list_all(&self) -> Result<Vec<AboutSectionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_about_sections");
        let sql = format!(
            "SELECT {} FROM about_sections ORDER BY updated_at DESC, id DESC",
            ABOUT_COLUMNS
        );
        let result = sqlx::query_as::<_, AboutSectionEntity>(&sql)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        singleton::count(&self.pool, KIND).await
    }

    /// Creates a section. An active section replaces the current one.
    pub async fn create(&self, req: &CreateAboutRequest) -> Result<AboutSectionEntity, ContentError> {
        let timer = QueryTimer::new("create_about");
        let mut tx = self.pool.begin().await?;

        if req.is_active {
            singleton::lock_and_clear_active(&mut tx, KIND, None).await?;
        }

        let sql = format!(
            r#"
            INSERT INTO about_sections (
                subtitle, title, description,
                feature_1_title, feature_1_description,
                feature_2_title, feature_2_description,
                feature_3_title, feature_3_description,
                is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            ABOUT_COLUMNS
        );
        let entity = sqlx::query_as::<_, AboutSectionEntity>(&sql)
            .bind(&req.subtitle)
            .bind(&req.title)
            .bind(&req.description)
            .bind(&req.feature_1_title)
            .bind(&req.feature_1_description)
            .bind(&req.feature_2_title)
            .bind(&req.feature_2_description)
            .bind(&req.feature_3_title)
            .bind(&req.feature_3_description)
            .bind(req.is_active)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        timer.record();
        Ok(entity)
    }

    /// Updates a section. Setting `is_active` to true deactivates the others.
    pub async fn update(
        &self,
        id: i64,
        req: &UpdateAboutRequest,
    ) -> Result<AboutSectionEntity, ContentError> {
        let timer = QueryTimer::new("update_about");
        let mut tx = self.pool.begin().await?;

        if req.is_active == Some(true) {
            singleton::lock_and_clear_active(&mut tx, KIND, Some(id)).await?;
        }

        let sql = format!(
            r#"
            UPDATE about_sections
            SET
                subtitle = COALESCE($2, subtitle),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                feature_1_title = COALESCE($5, feature_1_title),
                feature_1_description = COALESCE($6, feature_1_description),
                feature_2_title = COALESCE($7, feature_2_title),
                feature_2_description = COALESCE($8, feature_2_description),
                feature_3_title = COALESCE($9, feature_3_title),
                feature_3_description = COALESCE($10, feature_3_description),
                is_active = COALESCE($11, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            ABOUT_COLUMNS
        );
        let entity = sqlx::query_as::<_, AboutSectionEntity>(&sql)
            .bind(id)
            .bind(req.subtitle.as_deref())
            .bind(req.title.as_deref())
            .bind(req.description.as_deref())
            .bind(req.feature_1_title.as_deref())
            .bind(req.feature_1_description.as_deref())
            .bind(req.feature_2_title.as_deref())
            .bind(req.feature_2_description.as_deref())
            .bind(req.feature_3_title.as_deref())
            .bind(req.feature_3_description.as_deref())
            .bind(req.is_active)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| ContentError::NotFound(format!("About section {} not found", id)))?;

        tx.commit().await?;
        timer.record();
        Ok(entity)
    }

    pub async fn activate(&self, id: i64) -> Result<AboutSectionEntity, ContentError> {
        singleton::activate(&self.pool, KIND, ABOUT_COLUMNS, id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ContentError> {
        singleton::delete(&self.pool, KIND, id).await
    }
}
