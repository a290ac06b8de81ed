//! Contact submission repository.

use domain::errors::ContentError;
use domain::models::contact_submission::{
    ClientMeta, SubmissionAction, SubmissionStatus, ValidContactForm,
};
use shared::pagination::Cursor;
use sqlx::PgPool;

use crate::entities::contact_submission::SUBMISSION_COLUMNS;
use crate::entities::{ContactSubmissionEntity, SubmissionStatusDb};
use crate::metrics::QueryTimer;

/// Repository for the contact_submissions table.
#[derive(Clone)]
pub struct ContactSubmissionRepository {
    pool: PgPool,
}

impl ContactSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Stores a new submission with status `new`.
    pub async fn create(
        &self,
        form: &ValidContactForm,
        meta: &ClientMeta,
    ) -> Result<ContactSubmissionEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_contact_submission");
        let sql = format!(
            r#"
            INSERT INTO contact_submissions (name, email, subject, message, ip_address, user_agent)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            SUBMISSION_COLUMNS
        );
        let result = sqlx::query_as::<_, ContactSubmissionEntity>(&sql)
            .bind(&form.name)
            .bind(&form.email)
            .bind(&form.subject)
            .bind(&form.message)
            .bind(meta.ip_address.map(|ip| ip.to_string()))
            .bind(&meta.user_agent)
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ContactSubmissionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_contact_submission_by_id");
        let sql = format!(
            "SELECT {} FROM contact_submissions WHERE id = $1",
            SUBMISSION_COLUMNS
        );
        let result = sqlx::query_as::<_, ContactSubmissionEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Newest-first page of submissions, fetching `limit + 1` rows so the
    /// caller can tell whether another page exists.
    pub async fn list_page(
        &self,
        after: Option<Cursor>,
        limit: i64,
        status: Option<SubmissionStatus>,
    ) -> Result<Vec<ContactSubmissionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_contact_submissions");
        let sql = format!(
            r#"
            SELECT {}
            FROM contact_submissions
            WHERE ($1::TIMESTAMPTZ IS NULL OR (submitted_at, id) < ($1, $2))
              AND ($3::submission_status IS NULL OR status = $3)
            ORDER BY submitted_at DESC, id DESC
            LIMIT $4
            "#,
            SUBMISSION_COLUMNS
        );
        let result = sqlx::query_as::<_, ContactSubmissionEntity>(&sql)
            .bind(after.map(|c| c.timestamp))
            .bind(after.map(|c| c.id).unwrap_or(0))
            .bind(status.map(SubmissionStatusDb::from))
            .bind(limit + 1)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Moves the given submissions from `new` to `read`.
    ///
    /// Each row is guarded by `status = 'new'`, so records that were already
    /// read keep their original `read_at` and concurrent inserts are untouched.
    /// Returns the rows that changed.
    pub async fn mark_read(&self, ids: &[i64]) -> Result<Vec<ContactSubmissionEntity>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let timer = QueryTimer::new("mark_contact_submissions_read");
        let sql = format!(
            r#"
            UPDATE contact_submissions
            SET status = 'read', read_at = COALESCE(read_at, NOW())
            WHERE id = ANY($1) AND status = 'new'
            RETURNING {}
            "#,
            SUBMISSION_COLUMNS
        );
        let result = sqlx::query_as::<_, ContactSubmissionEntity>(&sql)
            .bind(ids)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Applies a bulk action and returns the ids that changed.
    pub async fn apply_action(
        &self,
        action: SubmissionAction,
        ids: &[i64],
    ) -> Result<Vec<i64>, sqlx::Error> {
        let timer = QueryTimer::new("apply_contact_submission_action");
        let sql = match action {
            SubmissionAction::MarkRead => {
                r#"
                UPDATE contact_submissions
                SET status = 'read', read_at = COALESCE(read_at, NOW())
                WHERE id = ANY($1) AND status = 'new'
                RETURNING id
                "#
            }
            SubmissionAction::MarkReplied => {
                r#"
                UPDATE contact_submissions
                SET status = 'replied', replied_at = NOW()
                WHERE id = ANY($1) AND status <> 'archived'
                RETURNING id
                "#
            }
            SubmissionAction::Archive => {
                r#"
                UPDATE contact_submissions
                SET status = 'archived'
                WHERE id = ANY($1) AND status <> 'archived'
                RETURNING id
                "#
            }
        };
        let result = sqlx::query_scalar::<_, i64>(sql)
            .bind(ids)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Moves one submission to `target`, enforcing the lifecycle.
    ///
    /// Re-applying the current status is a no-op, except `replied`, which
    /// refreshes `replied_at`.
    pub async fn transition(
        &self,
        id: i64,
        target: SubmissionStatus,
    ) -> Result<ContactSubmissionEntity, ContentError> {
        let timer = QueryTimer::new("transition_contact_submission");
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            "SELECT {} FROM contact_submissions WHERE id = $1 FOR UPDATE",
            SUBMISSION_COLUMNS
        );
        let current = sqlx::query_as::<_, ContactSubmissionEntity>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| ContentError::NotFound(format!("Submission {} not found", id)))?;

        let from: SubmissionStatus = current.status.into();
        if from == target && target != SubmissionStatus::Replied {
            return Ok(current);
        }
        if !from.can_transition_to(target) {
            return Err(ContentError::InvalidTransition { from, to: target });
        }

        let sql = format!(
            r#"
            UPDATE contact_submissions
            SET
                status = $2,
                read_at = CASE WHEN $2 = 'read'::submission_status THEN COALESCE(read_at, NOW()) ELSE read_at END,
                replied_at = CASE WHEN $2 = 'replied'::submission_status THEN NOW() ELSE replied_at END
            WHERE id = $1
            RETURNING {}
            "#,
            SUBMISSION_COLUMNS
        );
        let updated = sqlx::query_as::<_, ContactSubmissionEntity>(&sql)
            .bind(id)
            .bind(SubmissionStatusDb::from(target))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        timer.record();
        Ok(updated)
    }

    pub async fn update_notes(
        &self,
        id: i64,
        admin_notes: &str,
    ) -> Result<Option<ContactSubmissionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_contact_submission_notes");
        let sql = format!(
            "UPDATE contact_submissions SET admin_notes = $2 WHERE id = $1 RETURNING {}",
            SUBMISSION_COLUMNS
        );
        let result = sqlx::query_as::<_, ContactSubmissionEntity>(&sql)
            .bind(id)
            .bind(admin_notes)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_contact_submission");
        let result = sqlx::query("DELETE FROM contact_submissions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }

    pub async fn count_by_status(&self, status: SubmissionStatus) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_contact_submissions_by_status");
        let result = sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions WHERE status = $1")
            .bind(SubmissionStatusDb::from(status))
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }
}
