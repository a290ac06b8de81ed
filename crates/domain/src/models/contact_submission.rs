//! Contact form submissions and their processing lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

pub const MSG_SUBMIT_SUCCESS: &str = "Thank you for your message! We will get back to you soon.";
pub const MSG_FIELDS_REQUIRED: &str = "All fields are required.";
pub const MSG_SUBMIT_FAILED: &str =
    "Sorry, there was an error sending your message. Please try again.";
pub const MSG_INVALID_FORMAT: &str = "Invalid request format.";

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_SUBJECT_LEN: usize = 300;

/// Processing stage of a submission.
///
/// `new → read` happens on first admin listing, `replied` and `archived` on
/// explicit actions. Nothing leaves `archived`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    New,
    Read,
    Replied,
    Archived,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::New => "new",
            SubmissionStatus::Read => "read",
            SubmissionStatus::Replied => "replied",
            SubmissionStatus::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::New => "New",
            SubmissionStatus::Read => "Read",
            SubmissionStatus::Replied => "Replied",
            SubmissionStatus::Archived => "Archived",
        }
    }

    /// Whether a record in this status may move to `target`.
    pub fn can_transition_to(&self, target: SubmissionStatus) -> bool {
        use SubmissionStatus::*;
        match (self, target) {
            (Archived, _) => false,
            (_, New) => false,
            (New, Read) => true,
            (_, Read) => false,
            (_, Replied) => true,
            (_, Archived) => true,
        }
    }
}

impl FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(SubmissionStatus::New),
            "read" => Ok(SubmissionStatus::Read),
            "replied" => Ok(SubmissionStatus::Replied),
            "archived" => Ok(SubmissionStatus::Archived),
            _ => Err(format!("Invalid submission status: {}", s)),
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub ip_address: Option<String>,
    pub user_agent: String,
    pub status: SubmissionStatus,
    pub admin_notes: String,
    pub submitted_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub replied_at: Option<DateTime<Utc>>,
}

/// Raw contact form fields as received from either transport.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A contact form whose fields are trimmed, present and within limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Request metadata recorded with a submission.
#[derive(Debug, Clone, Default)]
pub struct ClientMeta {
    pub ip_address: Option<IpAddr>,
    pub user_agent: String,
}

/// Outcome of the contact pipeline when a submission is not stored.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Missing required fields: {}", missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    #[error("Field too long: {field}")]
    TooLong { field: &'static str },

    #[error("Malformed request body")]
    MalformedRequest,

    #[error("Failed to store submission: {0}")]
    Store(String),
}

impl ContactError {
    /// Message shown to the visitor.
    pub fn user_message(&self) -> &'static str {
        match self {
            ContactError::Validation { .. } => MSG_FIELDS_REQUIRED,
            ContactError::MalformedRequest => MSG_INVALID_FORMAT,
            ContactError::TooLong { .. } | ContactError::Store(_) => MSG_SUBMIT_FAILED,
        }
    }

    /// Label for the `outcome` metric dimension.
    pub fn outcome(&self) -> &'static str {
        match self {
            ContactError::Validation { .. } => "missing_fields",
            ContactError::TooLong { .. } => "too_long",
            ContactError::MalformedRequest => "malformed",
            ContactError::Store(_) => "store_error",
        }
    }
}

impl ContactForm {
    /// Trims every field and checks presence, then length.
    ///
    /// Blank fields are reported together, in form order.
    pub fn validate(self) -> Result<ValidContactForm, ContactError> {
        let form = ValidContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        let missing: Vec<&'static str> = [
            ("name", &form.name),
            ("email", &form.email),
            ("subject", &form.subject),
            ("message", &form.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ContactError::Validation { missing });
        }

        for (field, value, max) in [
            ("name", &form.name, MAX_NAME_LEN),
            ("email", &form.email, MAX_EMAIL_LEN),
            ("subject", &form.subject, MAX_SUBJECT_LEN),
        ] {
            if value.chars().count() > max {
                return Err(ContactError::TooLong { field });
            }
        }

        Ok(form)
    }
}

/// JSON reply of the asynchronous contact endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: MSG_SUBMIT_SUCCESS.to_string(),
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

impl From<&ContactError> for ContactResponse {
    fn from(err: &ContactError) -> Self {
        ContactResponse::failed(err.user_message())
    }
}

/// Query parameters for the admin submission listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionListQuery {
    pub cursor: Option<String>,
    pub limit: Option<i64>,
    pub status: Option<SubmissionStatus>,
}

/// Request payload for editing a single submission.
///
/// `status` moves the record through the lifecycle; leaving `archived` is
/// rejected.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateSubmissionRequest {
    #[validate(length(max = 10000, message = "Notes must be at most 10000 characters"))]
    pub admin_notes: Option<String>,

    pub status: Option<SubmissionStatus>,
}

/// Bulk action on submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionAction {
    MarkRead,
    MarkReplied,
    Archive,
}

impl SubmissionAction {
    pub fn target_status(&self) -> SubmissionStatus {
        match self {
            SubmissionAction::MarkRead => SubmissionStatus::Read,
            SubmissionAction::MarkReplied => SubmissionStatus::Replied,
            SubmissionAction::Archive => SubmissionStatus::Archived,
        }
    }
}

/// Request payload for a bulk submission action.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct SubmissionActionRequest {
    pub action: SubmissionAction,

    #[validate(length(min = 1, max = 500, message = "Between 1 and 500 ids are required"))]
    pub ids: Vec<i64>,
}

/// Result of a bulk submission action.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SubmissionActionResult {
    pub action: SubmissionAction,
    pub updated: u64,
    /// Ids whose current status does not allow the action.
    pub skipped: Vec<i64>,
}
