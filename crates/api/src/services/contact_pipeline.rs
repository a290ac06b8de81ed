//! Contact form intake: validate, store, count.

use domain::models::contact_submission::{ClientMeta, ContactError, ContactForm};
use domain::models::ContactSubmission;
use persistence::repositories::ContactSubmissionRepository;
use sqlx::PgPool;

use crate::middleware::metrics::record_contact_submission;

/// Validates and stores a submission with status `new`.
///
/// Every outcome is counted in `contact_submissions_total`. A store failure
/// is logged here and reported as [`ContactError::Store`].
pub async fn submit(
    pool: &PgPool,
    form: ContactForm,
    meta: &ClientMeta,
) -> Result<ContactSubmission, ContactError> {
    let valid = form.validate().map_err(|err| {
        record_rejection(&err);
        err
    })?;

    let repo = ContactSubmissionRepository::new(pool.clone());
    match repo.create(&valid, meta).await {
        Ok(entity) => {
            record_contact_submission("stored");
            tracing::info!(submission_id = entity.id, "Contact submission stored");
            Ok(entity.into())
        }
        Err(e) => {
            let err = ContactError::Store(e.to_string());
            record_rejection(&err);
            Err(err)
        }
    }
}

/// Counts and logs a submission that was not stored.
pub fn record_rejection(err: &ContactError) {
    record_contact_submission(err.outcome());
    match err {
        ContactError::Store(detail) => {
            tracing::error!(error = %detail, "Failed to store contact submission")
        }
        other => tracing::info!(outcome = other.outcome(), "Contact submission rejected: {}", other),
    }
}
