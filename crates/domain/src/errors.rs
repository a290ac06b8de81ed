//! Domain error taxonomy for content store operations.

use thiserror::Error;

use crate::models::contact_submission::SubmissionStatus;

/// PostgreSQL SQLSTATE for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Errors raised by content store operations.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    MalformedRequest(String),

    #[error("{0}")]
    UniquenessViolation(String),

    #[error("{0}")]
    ProtectedDeletion(String),

    #[error("Cannot move submission from {from} to {to}")]
    InvalidTransition {
        from: SubmissionStatus,
        to: SubmissionStatus,
    },

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ContentError {
    /// Maps a unique-constraint failure to [`ContentError::UniquenessViolation`].
    ///
    /// Any other database error is kept as [`ContentError::Database`].
    pub fn from_unique(err: sqlx::Error, message: impl Into<String>) -> Self {
        if is_unique_violation(&err) {
            ContentError::UniquenessViolation(message.into())
        } else {
            ContentError::Database(err)
        }
    }
}

/// Returns `true` if the error is a PostgreSQL unique violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}
