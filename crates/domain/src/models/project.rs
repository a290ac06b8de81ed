//! Project showcase domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::media::resolve_media_src;

fn default_true() -> bool {
    true
}

/// A completed or ongoing project in the portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub short_description: String,
    pub full_description: String,
    pub image_url: String,
    pub image_file: Option<String>,
    pub client_name: String,
    /// Free text such as "December 2024" or "Ongoing".
    pub completion_date: String,
    pub location: String,
    pub slug: String,
    pub is_featured: bool,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Public image source: uploaded file first, then the external URL.
    pub fn image_src(&self, media_prefix: &str) -> Option<String> {
        resolve_media_src(self.image_file.as_deref(), &self.image_url, media_prefix)
    }
}

/// Request payload for creating a project.
///
/// When `slug` is omitted a unique one is derived from the title.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 100, message = "Category must be between 1 and 100 characters"))]
    pub category: String,

    #[validate(length(min = 1, max = 250, message = "Short description must be between 1 and 250 characters"))]
    pub short_description: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub full_description: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Image URL must be at most 500 characters"))]
    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub image_url: String,

    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub image_file: Option<String>,

    #[serde(default)]
    #[validate(length(max = 200, message = "Client name must be at most 200 characters"))]
    pub client_name: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "Completion date must be at most 100 characters"))]
    pub completion_date: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: String,

    #[validate(length(max = 200, message = "Slug must be at most 200 characters"))]
    #[validate(custom(function = "shared::validation::validate_slug_format"))]
    pub slug: Option<String>,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub display_order: i32,
}

/// Request payload for updating a project. The slug is fixed at creation.
///
/// An empty `image_file` clears the uploaded image.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Category must be between 1 and 100 characters"))]
    pub category: Option<String>,

    #[validate(length(min = 1, max = 250, message = "Short description must be between 1 and 250 characters"))]
    pub short_description: Option<String>,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub full_description: Option<String>,

    #[validate(length(max = 500, message = "Image URL must be at most 500 characters"))]
    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub image_url: Option<String>,

    pub image_file: Option<String>,

    #[validate(length(max = 200, message = "Client name must be at most 200 characters"))]
    pub client_name: Option<String>,

    #[validate(length(max = 100, message = "Completion date must be at most 100 characters"))]
    pub completion_date: Option<String>,

    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: Option<String>,

    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

impl UpdateProjectRequest {
    /// Validates field rules plus the image path, where an empty string is allowed.
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()?;
        if let Some(path) = self.image_file.as_deref().filter(|p| !p.trim().is_empty()) {
            if let Err(err) = shared::validation::validate_media_path(path) {
                let mut errors = validator::ValidationErrors::new();
                errors.add("image_file", err);
                return Err(errors);
            }
        }
        Ok(())
    }
}
