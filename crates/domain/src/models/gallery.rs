//! Gallery item domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use super::media::resolve_media_src;

/// Kind of media a gallery item shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gallery filter category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    #[default]
    Workshop,
    Fabrication,
    Welding,
    Machinery,
    Projects,
    Assembly,
    Testing,
    Installation,
    Other,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 9] = [
        GalleryCategory::Workshop,
        GalleryCategory::Fabrication,
        GalleryCategory::Welding,
        GalleryCategory::Machinery,
        GalleryCategory::Projects,
        GalleryCategory::Assembly,
        GalleryCategory::Testing,
        GalleryCategory::Installation,
        GalleryCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Workshop => "workshop",
            GalleryCategory::Fabrication => "fabrication",
            GalleryCategory::Welding => "welding",
            GalleryCategory::Machinery => "machinery",
            GalleryCategory::Projects => "projects",
            GalleryCategory::Assembly => "assembly",
            GalleryCategory::Testing => "testing",
            GalleryCategory::Installation => "installation",
            GalleryCategory::Other => "other",
        }
    }

    /// Human-readable label for filter buttons.
    pub fn label(&self) -> &'static str {
        match self {
            GalleryCategory::Workshop => "Workshop",
            GalleryCategory::Fabrication => "Fabrication",
            GalleryCategory::Welding => "Welding",
            GalleryCategory::Machinery => "Machinery",
            GalleryCategory::Projects => "Projects",
            GalleryCategory::Assembly => "Assembly",
            GalleryCategory::Testing => "Testing",
            GalleryCategory::Installation => "Installation",
            GalleryCategory::Other => "Other",
        }
    }
}

impl FromStr for GalleryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GalleryCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Invalid gallery category: {}", s))
    }
}

impl fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A photo or video in the workshop gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GalleryItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub media_type: MediaType,
    pub category: GalleryCategory,
    pub media_url: String,
    pub media_file: Option<String>,
    pub thumbnail_url: String,
    pub thumbnail_file: Option<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GalleryItem {
    pub fn media_src(&self, media_prefix: &str) -> Option<String> {
        resolve_media_src(self.media_file.as_deref(), &self.media_url, media_prefix)
    }

    /// Thumbnail source; falls back to the main media for images.
    pub fn thumbnail_src(&self, media_prefix: &str) -> Option<String> {
        resolve_media_src(
            self.thumbnail_file.as_deref(),
            &self.thumbnail_url,
            media_prefix,
        )
        .or_else(|| match self.media_type {
            MediaType::Image => self.media_src(media_prefix),
            MediaType::Video => None,
        })
    }
}

fn default_true() -> bool {
    true
}

/// Request payload for creating a gallery item.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateGalleryItemRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 300, message = "Description must be between 1 and 300 characters"))]
    pub description: String,

    #[serde(default)]
    pub media_type: MediaType,

    #[serde(default)]
    pub category: GalleryCategory,

    #[serde(default)]
    #[validate(length(max = 500, message = "Media URL must be at most 500 characters"))]
    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub media_url: String,

    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub media_file: Option<String>,

    #[serde(default)]
    #[validate(length(max = 500, message = "Thumbnail URL must be at most 500 characters"))]
    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub thumbnail_url: String,

    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub thumbnail_file: Option<String>,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub display_order: i32,
}

/// Request payload for updating a gallery item.
///
/// An empty `media_file` or `thumbnail_file` clears the stored upload.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateGalleryItemRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 300, message = "Description must be between 1 and 300 characters"))]
    pub description: Option<String>,

    pub media_type: Option<MediaType>,
    pub category: Option<GalleryCategory>,

    #[validate(length(max = 500, message = "Media URL must be at most 500 characters"))]
    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub media_url: Option<String>,

    pub media_file: Option<String>,

    #[validate(length(max = 500, message = "Thumbnail URL must be at most 500 characters"))]
    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub thumbnail_url: Option<String>,

    pub thumbnail_file: Option<String>,

    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

impl UpdateGalleryItemRequest {
    /// Validates field rules plus the upload paths, where an empty string is allowed.
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()?;
        let mut errors = validator::ValidationErrors::new();
        for (field, value) in [
            ("media_file", &self.media_file),
            ("thumbnail_file", &self.thumbnail_file),
        ] {
            if let Some(path) = value.as_deref().filter(|p| !p.trim().is_empty()) {
                if let Err(err) = shared::validation::validate_media_path(path) {
                    errors.add(field, err);
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(media_type: MediaType) -> GalleryItem {
        let now = Utc::now();
        GalleryItem {
            id: 3,
            title: "CNC Machining Process".into(),
            description: "Precision cutting".into(),
            media_type,
            category: GalleryCategory::Machinery,
            media_url: "https://cdn.example/cnc.mp4".into(),
            media_file: None,
            thumbnail_url: String::new(),
            thumbnail_file: None,
            is_featured: false,
            is_active: true,
            display_order: 3,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_category_labels_and_parsing() {
        assert_eq!(GalleryCategory::Installation.label(), "Installation");
        assert_eq!(
            GalleryCategory::from_str("Welding").unwrap(),
            GalleryCategory::Welding
        );
        assert!(GalleryCategory::from_str("painting").is_err());
        assert_eq!(GalleryCategory::ALL.len(), 9);
    }

    #[test]
    fn test_media_src_prefers_file() {
        let mut g = item(MediaType::Image);
        g.media_file = Some("gallery/weld.jpg".into());
        assert_eq!(g.media_src("/media").as_deref(), Some("/media/gallery/weld.jpg"));
    }

    #[test]
    fn test_thumbnail_falls_back_for_images_only() {
        let image = item(MediaType::Image);
        assert_eq!(
            image.thumbnail_src("/media").as_deref(),
            Some("https://cdn.example/cnc.mp4")
        );

        let video = item(MediaType::Video);
        assert_eq!(video.thumbnail_src("/media"), None);
    }

    #[test]
    fn test_thumbnail_file_wins() {
        let mut g = item(MediaType::Video);
        g.thumbnail_url = "https://cdn.example/thumb.jpg".into();
        g.thumbnail_file = Some("gallery/thumbnails/cnc.jpg".into());
        assert_eq!(
            g.thumbnail_src("/media").as_deref(),
            Some("/media/gallery/thumbnails/cnc.jpg")
        );
    }

    #[test]
    fn test_create_request_enum_parsing() {
        let req: CreateGalleryItemRequest = serde_json::from_value(serde_json::json!({
            "title": "Structural Steel Work",
            "description": "Large scale structural fabrication",
            "category": "fabrication",
            "media_type": "video",
        }))
        .unwrap();
        assert_eq!(req.category, GalleryCategory::Fabrication);
        assert_eq!(req.media_type, MediaType::Video);
        assert!(req.validate().is_ok());

        let bad = serde_json::from_value::<CreateGalleryItemRequest>(serde_json::json!({
            "title": "X",
            "description": "Y",
            "category": "painting",
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_update_validates_upload_paths() {
        let req = UpdateGalleryItemRequest {
            thumbnail_file: Some("/abs/path.png".into()),
            ..Default::default()
        };
        assert!(req.validate_all().is_err());

        let clear = UpdateGalleryItemRequest {
            media_file: Some(String::new()),
            ..Default::default()
        };
        assert!(clear.validate_all().is_ok());
    }
}
