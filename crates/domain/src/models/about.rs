//! About section domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One of the three feature highlights shown under the About text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutFeature {
    pub title: String,
    pub description: String,
}

/// Company introduction block on the homepage.
///
/// At most one row is active at a time; see `SingletonKind::About`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AboutSection {
    pub id: i64,
    pub subtitle: String,
    pub title: String,
    pub description: String,
    pub feature_1_title: String,
    pub feature_1_description: String,
    pub feature_2_title: String,
    pub feature_2_description: String,
    pub feature_3_title: String,
    pub feature_3_description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AboutSection {
    pub fn features(&self) -> [AboutFeature; 3] {
        [
            AboutFeature {
                title: self.feature_1_title.clone(),
                description: self.feature_1_description.clone(),
            },
            AboutFeature {
                title: self.feature_2_title.clone(),
                description: self.feature_2_description.clone(),
            },
            AboutFeature {
                title: self.feature_3_title.clone(),
                description: self.feature_3_description.clone(),
            },
        ]
    }
}

/// Request payload for creating an About section.
///
/// Omitted fields take the stock company copy.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default, rename_all = "snake_case")]
pub struct CreateAboutRequest {
    #[validate(length(min = 1, max = 200, message = "Subtitle must be between 1 and 200 characters"))]
    pub subtitle: String,

    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub description: String,

    #[validate(length(min = 1, max = 100, message = "Feature title must be between 1 and 100 characters"))]
    pub feature_1_title: String,
    pub feature_1_description: String,

    #[validate(length(min = 1, max = 100, message = "Feature title must be between 1 and 100 characters"))]
    pub feature_2_title: String,
    pub feature_2_description: String,

    #[validate(length(min = 1, max = 100, message = "Feature title must be between 1 and 100 characters"))]
    pub feature_3_title: String,
    pub feature_3_description: String,

    pub is_active: bool,
}

impl Default for CreateAboutRequest {
    fn default() -> Self {
        Self {
            subtitle: "About Vishwakarma Mechfab".to_string(),
            title: "Engineering Excellence Since 2010".to_string(),
            description: String::new(),
            feature_1_title: "Certified Engineers".to_string(),
            feature_1_description:
                "Licensed professional engineers with extensive industry experience".to_string(),
            feature_2_title: "Quality Assurance".to_string(),
            feature_2_description: "ISO certified processes ensuring highest quality standards"
                .to_string(),
            feature_3_title: "Latest Technology".to_string(),
            feature_3_description: "State-of-the-art tools and software for optimal results"
                .to_string(),
            is_active: true,
        }
    }
}

/// Request payload for updating an About section. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateAboutRequest {
    #[validate(length(min = 1, max = 200, message = "Subtitle must be between 1 and 200 characters"))]
    pub subtitle: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: Option<String>,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Feature title must be between 1 and 100 characters"))]
    pub feature_1_title: Option<String>,
    pub feature_1_description: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Feature title must be between 1 and 100 characters"))]
    pub feature_2_title: Option<String>,
    pub feature_2_description: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Feature title must be between 1 and 100 characters"))]
    pub feature_3_title: Option<String>,
    pub feature_3_description: Option<String>,

    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AboutSection {
        let now = Utc::now();
        AboutSection {
            id: 1,
            subtitle: "About".into(),
            title: "Since 2010".into(),
            description: "We build things.".into(),
            feature_1_title: "A".into(),
            feature_1_description: "a".into(),
            feature_2_title: "B".into(),
            feature_2_description: "b".into(),
            feature_3_title: "C".into(),
            feature_3_description: "c".into(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_features_in_order() {
        let features = sample().features();
        let titles: Vec<&str> = features.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(features[2].description, "c");
    }

    #[test]
    fn test_create_request_defaults_from_partial_json() {
        let req: CreateAboutRequest =
            serde_json::from_str(r#"{"description": "Fabrication experts."}"#).unwrap();
        assert_eq!(req.title, "Engineering Excellence Since 2010");
        assert_eq!(req.feature_2_title, "Quality Assurance");
        assert!(req.is_active);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_requires_description() {
        let req: CreateAboutRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_rejects_blank_description() {
        let req = UpdateAboutRequest {
            description: Some("   ".into()),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }
}
