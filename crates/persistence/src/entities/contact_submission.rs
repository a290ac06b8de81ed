//! Contact submission entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::contact_submission::SubmissionStatus;
use sqlx::FromRow;

pub const SUBMISSION_COLUMNS: &str = "id, name, email, subject, message, ip_address, user_agent, \
    status, admin_notes, submitted_at, read_at, replied_at";

/// Database enum for submission_status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "submission_status", rename_all = "lowercase")]
pub enum SubmissionStatusDb {
    New,
    Read,
    Replied,
    Archived,
}

impl From<SubmissionStatusDb> for SubmissionStatus {
    fn from(db: SubmissionStatusDb) -> Self {
        match db {
            SubmissionStatusDb::New => SubmissionStatus::New,
            SubmissionStatusDb::Read => SubmissionStatus::Read,
            SubmissionStatusDb::Replied => SubmissionStatus::Replied,
            SubmissionStatusDb::Archived => SubmissionStatus::Archived,
        }
    }
}

impl From<SubmissionStatus> for SubmissionStatusDb {
    fn from(status: SubmissionStatus) -> Self {
        match status {
            SubmissionStatus::New => SubmissionStatusDb::New,
            SubmissionStatus::Read => SubmissionStatusDb::Read,
            SubmissionStatus::Replied => SubmissionStatusDb::Replied,
            SubmissionStatus::Archived => SubmissionStatusDb::Archived,
        }
    }
}

/// Database row mapping for the contact_submissions table.
#[derive(Debug, Clone, FromRow)]
pub struct ContactSubmissionEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub ip_address: Option<String>,
    pub user_agent: String,
    pub status: SubmissionStatusDb,
    pub admin_notes: String,
    pub submitted_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub replied_at: Option<DateTime<Utc>>,
}

impl From<ContactSubmissionEntity> for domain::models::ContactSubmission {
    fn from(entity: ContactSubmissionEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            subject: entity.subject,
            message: entity.message,
            ip_address: entity.ip_address,
            user_agent: entity.user_agent,
            status: entity.status.into(),
            admin_notes: entity.admin_notes,
            submitted_at: entity.submitted_at,
            read_at: entity.read_at,
            replied_at: entity.replied_at,
        }
    }
}
