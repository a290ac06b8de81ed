//! Project repository.

use domain::errors::ContentError;
use domain::models::media::normalize_file_ref;
use domain::models::project::{CreateProjectRequest, UpdateProjectRequest};
use domain::services::{derive_slug, resolve_unique_slug, slug_stem, Listing};
use sqlx::PgPool;

use crate::entities::project::PROJECT_COLUMNS;
use crate::entities::ProjectEntity;
use crate::metrics::QueryTimer;

/// Repository for the projects table.
#[derive(Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Active projects ordered by `(display_order, created_at DESC, id DESC)`.
    pub async fn list_public(&self, listing: Listing) -> Result<Vec<ProjectEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_public_projects");
        let sql = format!(
            r#"
            SELECT {}
            FROM projects
            WHERE is_active = true
              AND (is_featured = true OR NOT $1)
            ORDER BY display_order ASC, created_at DESC, id DESC
            LIMIT $2
            "#,
            PROJECT_COLUMNS
        );
        let result = sqlx::query_as::<_, ProjectEntity>(&sql)
            .bind(listing.featured_only)
            .bind(listing.sql_limit())
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn list_all(&self) -> Result<Vec<ProjectEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_all_projects");
        let sql = format!(
            "SELECT {} FROM projects ORDER BY display_order ASC, created_at DESC, id DESC",
            PROJECT_COLUMNS
        );
        let result = sqlx::query_as::<_, ProjectEntity>(&sql)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ProjectEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_project_by_id");
        let sql = format!("SELECT {} FROM projects WHERE id = $1", PROJECT_COLUMNS);
        let result = sqlx::query_as::<_, ProjectEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await
    }

    /// Existing slugs that could collide with a candidate derived from `base`.
    ///
    /// Matches on [`slug_stem`], which also covers candidates shortened to
    /// fit a suffix.
    pub async fn taken_slugs(
        &self,
        base: &str,
        exclude_id: Option<i64>,
    ) -> Result<Vec<String>, sqlx::Error> {
        let timer = QueryTimer::new("find_taken_project_slugs");
        // Slugs only contain [a-z0-9-], so the LIKE pattern needs no escaping.
        let result = sqlx::query_scalar::<_, String>(
            r#"
            SELECT slug
            FROM projects
            WHERE slug LIKE $1 || '%'
              AND ($2::BIGINT IS NULL OR id <> $2)
            "#,
        )
        .bind(slug_stem(base))
        .bind(exclude_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Creates a project.
    ///
    /// A supplied slug is kept verbatim and must be free. Without one, the
    /// title's slug gets the first free `-N` suffix.
    pub async fn create(&self, req: &CreateProjectRequest) -> Result<ProjectEntity, ContentError> {
        let slug = match req.slug.as_deref() {
            Some(slug) => slug.to_string(),
            None => {
                let base = derive_slug(&req.title)?;
                let taken = self.taken_slugs(&base, None).await?;
                resolve_unique_slug(&base, &taken)
            }
        };

        let timer = QueryTimer::new("create_project");
        let sql = format!(
            r#"
            INSERT INTO projects (
                title, category, short_description, full_description, image_url, image_file,
                client_name, completion_date, location, slug, is_featured, is_active, display_order
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {}
            "#,
            PROJECT_COLUMNS
        );
        let result = sqlx::query_as::<_, ProjectEntity>(&sql)
            .bind(&req.title)
            .bind(&req.category)
            .bind(&req.short_description)
            .bind(&req.full_description)
            .bind(req.image_url.trim())
            .bind(normalize_file_ref(req.image_file.clone()))
            .bind(&req.client_name)
            .bind(&req.completion_date)
            .bind(&req.location)
            .bind(&slug)
            .bind(req.is_featured)
            .bind(req.is_active)
            .bind(req.display_order)
            .fetch_one(&self.pool)
            .await;
        timer.record();

        result.map_err(|e| {
            ContentError::from_unique(e, format!("A project with slug '{}' already exists", slug))
        })
    }

    /// Updates a project. The slug never changes; an empty `image_file` clears it.
    pub async fn update(
        &self,
        id: i64,
        req: &UpdateProjectRequest,
    ) -> Result<ProjectEntity, ContentError> {
        let timer = QueryTimer::new("update_project");
        let sql = format!(
            r#"
            UPDATE projects
            SET
                title = COALESCE($2, title),
                category = COALESCE($3, category),
                short_description = COALESCE($4, short_description),
                full_description = COALESCE($5, full_description),
                image_url = COALESCE($6, image_url),
                image_file = CASE WHEN $7::TEXT IS NULL THEN image_file
                                  ELSE NULLIF($7, '') END,
                client_name = COALESCE($8, client_name),
                completion_date = COALESCE($9, completion_date),
                location = COALESCE($10, location),
                is_featured = COALESCE($11, is_featured),
                is_active = COALESCE($12, is_active),
                display_order = COALESCE($13, display_order),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            PROJECT_COLUMNS
        );
        let result = sqlx::query_as::<_, ProjectEntity>(&sql)
            .bind(id)
            .bind(req.title.as_deref())
            .bind(req.category.as_deref())
            .bind(req.short_description.as_deref())
            .bind(req.full_description.as_deref())
            .bind(req.image_url.as_deref().map(str::trim))
            .bind(req.image_file.as_deref().map(str::trim))
            .bind(req.client_name.as_deref())
            .bind(req.completion_date.as_deref())
            .bind(req.location.as_deref())
            .bind(req.is_featured)
            .bind(req.is_active)
            .bind(req.display_order)
            .fetch_optional(&self.pool)
            .await;
        timer.record();

        result?.ok_or_else(|| ContentError::NotFound(format!("Project {} not found", id)))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ContentError> {
        let timer = QueryTimer::new("delete_project");
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();

        if result?.rows_affected() == 0 {
            return Err(ContentError::NotFound(format!("Project {} not found", id)));
        }
        Ok(())
    }
}
