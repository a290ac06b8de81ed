//! Company contact information shown in the footer and contact section.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail};

/// A social network link with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub network: &'static str,
    pub url: String,
}

/// Contact details record. At most one row is active at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ContactInfo {
    pub id: i64,
    pub company_name: String,
    pub tagline: String,
    pub address_line_1: String,
    pub address_line_2: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pin_code: String,
    pub primary_phone: String,
    pub secondary_phone: String,
    pub whatsapp_number: String,
    pub primary_email: String,
    pub secondary_email: String,
    pub website_url: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub linkedin_url: String,
    pub whatsapp_url: String,
    pub twitter_url: String,
    pub youtube_url: String,
    pub working_hours_weekdays: String,
    pub working_hours_weekend: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContactInfo {
    /// Joins the non-empty address parts with `", "`.
    ///
    /// Order is line 1, line 2, city, state, country, PIN.
    pub fn full_address(&self) -> String {
        [
            &self.address_line_1,
            &self.address_line_2,
            &self.city,
            &self.state,
            &self.country,
            &self.pin_code,
        ]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// Social links that are set, in a fixed network order.
    pub fn social_links(&self) -> Vec<SocialLink> {
        [
            ("Facebook", &self.facebook_url),
            ("Instagram", &self.instagram_url),
            ("LinkedIn", &self.linkedin_url),
            ("WhatsApp", &self.whatsapp_url),
            ("Twitter", &self.twitter_url),
            ("YouTube", &self.youtube_url),
        ]
        .into_iter()
        .filter(|(_, url)| !url.trim().is_empty())
        .map(|(network, url)| SocialLink {
            network,
            url: url.clone(),
        })
        .collect()
    }
}

fn validate_optional_email(value: &str) -> Result<(), validator::ValidationError> {
    if value.is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("email")
            .with_message(std::borrow::Cow::Borrowed("Invalid email format")))
    }
}

/// Request payload for creating contact info. Omitted fields take the company defaults.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default, rename_all = "snake_case")]
pub struct CreateContactInfoRequest {
    #[validate(length(min = 1, max = 200, message = "Company name must be between 1 and 200 characters"))]
    pub company_name: String,
    #[validate(length(max = 200, message = "Tagline must be at most 200 characters"))]
    pub tagline: String,
    #[validate(length(max = 200, message = "Address line must be at most 200 characters"))]
    pub address_line_1: String,
    #[validate(length(max = 200, message = "Address line must be at most 200 characters"))]
    pub address_line_2: String,
    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: String,
    #[validate(length(max = 100, message = "State must be at most 100 characters"))]
    pub state: String,
    #[validate(length(max = 100, message = "Country must be at most 100 characters"))]
    pub country: String,
    #[validate(length(max = 20, message = "PIN code must be at most 20 characters"))]
    pub pin_code: String,
    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub primary_phone: String,
    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub secondary_phone: String,
    #[validate(length(max = 20, message = "WhatsApp number must be at most 20 characters"))]
    pub whatsapp_number: String,
    #[validate(email(message = "Invalid email format"))]
    pub primary_email: String,
    #[validate(custom(function = "validate_optional_email"))]
    pub secondary_email: String,
    #[validate(length(max = 200, message = "Website must be at most 200 characters"))]
    pub website_url: String,
    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub facebook_url: String,
    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub instagram_url: String,
    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub linkedin_url: String,
    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub whatsapp_url: String,
    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub twitter_url: String,
    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub youtube_url: String,
    #[validate(length(max = 100, message = "Working hours must be at most 100 characters"))]
    pub working_hours_weekdays: String,
    #[validate(length(max = 100, message = "Working hours must be at most 100 characters"))]
    pub working_hours_weekend: String,
    pub is_active: bool,
}

impl Default for CreateContactInfoRequest {
    fn default() -> Self {
        Self {
            company_name: "Vishwakarma Mechfab".to_string(),
            tagline: "Professional mechanical engineering and fabrication solutions for industrial excellence.".to_string(),
            address_line_1: "Industrial Area".to_string(),
            address_line_2: String::new(),
            city: "Gujarat".to_string(),
            state: "Gujarat".to_string(),
            country: "India".to_string(),
            pin_code: "123456".to_string(),
            primary_phone: "+91 98765 43210".to_string(),
            secondary_phone: String::new(),
            whatsapp_number: String::new(),
            primary_email: "info@vishwakarmamechfab.in".to_string(),
            secondary_email: String::new(),
            website_url: "vishwakarmamechfab.in".to_string(),
            facebook_url: String::new(),
            instagram_url: String::new(),
            linkedin_url: String::new(),
            whatsapp_url: String::new(),
            twitter_url: String::new(),
            youtube_url: String::new(),
            working_hours_weekdays: "Mon - Sat: 9:00 AM - 6:00 PM".to_string(),
            working_hours_weekend: "Sunday: Closed".to_string(),
            is_active: true,
        }
    }
}

/// Request payload for updating contact info. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateContactInfoRequest {
    #[validate(length(min = 1, max = 200, message = "Company name must be between 1 and 200 characters"))]
    pub company_name: Option<String>,
    #[validate(length(max = 200, message = "Tagline must be at most 200 characters"))]
    pub tagline: Option<String>,
    #[validate(length(max = 200, message = "Address line must be at most 200 characters"))]
    pub address_line_1: Option<String>,
    #[validate(length(max = 200, message = "Address line must be at most 200 characters"))]
    pub address_line_2: Option<String>,
    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: Option<String>,
    #[validate(length(max = 100, message = "State must be at most 100 characters"))]
    pub state: Option<String>,
    #[validate(length(max = 100, message = "Country must be at most 100 characters"))]
    pub country: Option<String>,
    #[validate(length(max = 20, message = "PIN code must be at most 20 characters"))]
    pub pin_code: Option<String>,
    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub primary_phone: Option<String>,
    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub secondary_phone: Option<String>,
    #[validate(length(max = 20, message = "WhatsApp number must be at most 20 characters"))]
    pub whatsapp_number: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub primary_email: Option<String>,
    #[validate(custom(function = "validate_optional_email"))]
    pub secondary_email: Option<String>,
    #[validate(length(max = 200, message = "Website must be at most 200 characters"))]
    pub website_url: Option<String>,
    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub facebook_url: Option<String>,
    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub instagram_url: Option<String>,
    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub linkedin_url: Option<String>,
    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub whatsapp_url: Option<String>,
    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub twitter_url: Option<String>,
    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub youtube_url: Option<String>,
    #[validate(length(max = 100, message = "Working hours must be at most 100 characters"))]
    pub working_hours_weekdays: Option<String>,
    #[validate(length(max = 100, message = "Working hours must be at most 100 characters"))]
    pub working_hours_weekend: Option<String>,
    pub is_active: Option<bool>,
}
