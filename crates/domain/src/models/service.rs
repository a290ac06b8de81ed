//! Service card domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_SERVICE_ICON: &str = "🔧";

fn default_icon() -> String {
    DEFAULT_SERVICE_ICON.to_string()
}

fn default_true() -> bool {
    true
}

/// A service offered by the company, shown as a card on the homepage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Service {
    pub id: i64,
    pub title: String,
    pub icon: String,
    pub description: String,
    pub slug: String,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a service.
///
/// When `slug` is omitted it is derived from the title.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateServiceRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: String,

    #[serde(default = "default_icon")]
    #[validate(length(min = 1, max = 10, message = "Icon must be between 1 and 10 characters"))]
    pub icon: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub description: String,

    #[validate(length(max = 100, message = "Slug must be at most 100 characters"))]
    #[validate(custom(function = "shared::validation::validate_slug_format"))]
    pub slug: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub display_order: i32,
}

/// Request payload for updating a service. The slug is fixed at creation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateServiceRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 10, message = "Icon must be between 1 and 10 characters"))]
    pub icon: Option<String>,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub description: Option<String>,

    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}
