//! Service repository.

use domain::errors::ContentError;
use domain::models::service::{CreateServiceRequest, UpdateServiceRequest};
use domain::services::{derive_slug, Listing};
use sqlx::PgPool;

use crate::entities::service::SERVICE_COLUMNS;
use crate::entities::ServiceEntity;
use crate::metrics::QueryTimer;

/// Repository for the services table.
#[derive(Clone)]
pub struct ServiceRepository {
    pool: PgPool,
}

impl ServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Active services ordered by `(display_order, title, id)`.
    ///
    /// Services carry no featured flag, so only the listing's limit applies.
    pub async fn list_public(&self, listing: Listing) -> Result<Vec<ServiceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_public_services");
        let sql = format!(
            r#"
            SELECT {}
            FROM services
            WHERE is_active = true
            ORDER BY display_order ASC, title ASC, id ASC
            LIMIT $1
            "#,
            SERVICE_COLUMNS
        );
        let result = sqlx::query_as::<_, ServiceEntity>(&sql)
            .bind(listing.sql_limit())
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Every service, in public order.
    pub async fn list_all(&self) -> Result<Vec<ServiceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_all_services");
        let sql = format!(
            "SELECT {} FROM services ORDER BY display_order ASC, title ASC, id ASC",
            SERVICE_COLUMNS
        );
        let result = sqlx::query_as::<_, ServiceEntity>(&sql)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ServiceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_service_by_id");
        let sql = format!("SELECT {} FROM services WHERE id = $1", SERVICE_COLUMNS);
        let result = sqlx::query_as::<_, ServiceEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM services")
            .fetch_one(&self.pool)
            .await
    }

    /// Creates a service. The slug is taken as given or derived from the
    /// title, and is never suffixed: a duplicate is rejected.
    pub async fn create(&self, req: &CreateServiceRequest) -> Result<ServiceEntity, ContentError> {
        let slug = match req.slug.as_deref() {
            Some(slug) => slug.to_string(),
            None => derive_slug(&req.title)?,
        };

        let timer = QueryTimer::new("create_service");
        let sql = format!(
            r#"
            INSERT INTO services (title, icon, description, slug, is_active, display_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            SERVICE_COLUMNS
        );
        let result = sqlx::query_as::<_, ServiceEntity>(&sql)
            .bind(&req.title)
            .bind(&req.icon)
            .bind(&req.description)
            .bind(&slug)
            .bind(req.is_active)
            .bind(req.display_order)
            .fetch_one(&self.pool)
            .await;
        timer.record();

        result.map_err(|e| {
            ContentError::from_unique(e, format!("A service with slug '{}' already exists", slug))
        })
    }

    /// Updates a service. The slug never changes.
    pub async fn update(
        &self,
        id: i64,
        req: &UpdateServiceRequest,
    ) -> Result<ServiceEntity, ContentError> {
        let timer = QueryTimer::new("update_service");
        let sql = format!(
            r#"
            UPDATE services
            SET
                title = COALESCE($2, title),
                icon = COALESCE($3, icon),
                description = COALESCE($4, description),
                is_active = COALESCE($5, is_active),
                display_order = COALESCE($6, display_order),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            SERVICE_COLUMNS
        );
        let result = sqlx::query_as::<_, ServiceEntity>(&sql)
            .bind(id)
            .bind(req.title.as_deref())
            .bind(req.icon.as_deref())
            .bind(req.description.as_deref())
            .bind(req.is_active)
            .bind(req.display_order)
            .fetch_optional(&self.pool)
            .await;
        timer.record();

        result?.ok_or_else(|| ContentError::NotFound(format!("Service {} not found", id)))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ContentError> {
        let timer = QueryTimer::new("delete_service");
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();

        if result?.rows_affected() == 0 {
            return Err(ContentError::NotFound(format!("Service {} not found", id)));
        }
        Ok(())
    }
}
