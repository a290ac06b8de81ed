//! Shared write paths for single-active-record tables.
//!
//! Every write that can set `is_active = true` goes through
//! [`lock_and_clear_active`] inside the same transaction, so the partial
//! unique index on `is_active` never sees two active rows.

use domain::errors::ContentError;
use domain::services::SingletonKind;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, Transaction};

use crate::metrics::QueryTimer;

/// Locks the table against concurrent writers and deactivates every active
/// row other than `keep_id`.
///
/// `EXCLUSIVE` mode still lets plain readers through. Deactivation leaves
/// `updated_at` untouched so the fallback ordering reflects real edits.
pub(crate) async fn lock_and_clear_active(
    tx: &mut Transaction<'_, Postgres>,
    kind: SingletonKind,
    keep_id: Option<i64>,
) -> Result<(), sqlx::Error> {
    sqlx::query(&format!("LOCK TABLE {} IN EXCLUSIVE MODE", kind.table()))
        .execute(&mut **tx)
        .await?;

    sqlx::query(&format!(
        "UPDATE {} SET is_active = false WHERE is_active AND ($1::BIGINT IS NULL OR id <> $1)",
        kind.table()
    ))
    .bind(keep_id)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

/// Makes `id` the single active record.
pub(crate) async fn activate<E>(
    pool: &PgPool,
    kind: SingletonKind,
    columns: &str,
    id: i64,
) -> Result<E, ContentError>
where
    E: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let timer = QueryTimer::new(format!("activate_{}", kind.table()));
    let mut tx = pool.begin().await?;

    lock_and_clear_active(&mut tx, kind, Some(id)).await?;

    let row = sqlx::query_as::<_, E>(&format!(
        "UPDATE {} SET is_active = true, updated_at = NOW() WHERE id = $1 RETURNING {}",
        kind.table(),
        columns
    ))
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    // Dropping the transaction rolls back the deactivation.
    let row = row.ok_or_else(|| ContentError::NotFound(format!("{} {} not found", kind, id)))?;

    tx.commit().await?;
    timer.record();
    Ok(row)
}

/// The active record, or the most recently updated one when none is active.
pub(crate) async fn find_active<E>(
    pool: &PgPool,
    kind: SingletonKind,
    columns: &str,
) -> Result<Option<E>, sqlx::Error>
where
    E: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let timer = QueryTimer::new(format!("find_active_{}", kind.table()));
    let result = sqlx::query_as::<_, E>(&format!(
        "SELECT {} FROM {} ORDER BY is_active DESC, updated_at DESC, id DESC LIMIT 1",
        columns,
        kind.table()
    ))
    .fetch_optional(pool)
    .await;
    timer.record();
    result
}

/// Deletes a record, honoring the kind's protection of its active row.
pub(crate) async fn delete(pool: &PgPool, kind: SingletonKind, id: i64) -> Result<(), ContentError> {
    let timer = QueryTimer::new(format!("delete_{}", kind.table()));
    let mut tx = pool.begin().await?;

    sqlx::query(&format!("LOCK TABLE {} IN EXCLUSIVE MODE", kind.table()))
        .execute(&mut *tx)
        .await?;

    let target_is_active: Option<bool> = sqlx::query_scalar(&format!(
        "SELECT is_active FROM {} WHERE id = $1",
        kind.table()
    ))
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let target_is_active =
        target_is_active.ok_or_else(|| ContentError::NotFound(format!("{} {} not found", kind, id)))?;

    let active_count: i64 = sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM {} WHERE is_active",
        kind.table()
    ))
    .fetch_one(&mut *tx)
    .await?;

    kind.check_deletion(target_is_active, active_count)?;

    sqlx::query(&format!("DELETE FROM {} WHERE id = $1", kind.table()))
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    timer.record();
    Ok(())
}

/// Counts rows in the table.
pub(crate) async fn count(pool: &PgPool, kind: SingletonKind) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", kind.table()))
        .fetch_one(pool)
        .await
}
