//! Contact info entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const CONTACT_INFO_COLUMNS: &str = "id, company_name, tagline, address_line_1, address_line_2, \
    city, state, country, pin_code, primary_phone, secondary_phone, whatsapp_number, \
    primary_email, secondary_email, website_url, facebook_url, instagram_url, linkedin_url, \
    whatsapp_url, twitter_url, youtube_url, working_hours_weekdays, working_hours_weekend, \
    is_active, created_at, updated_at";

/// Database row mapping for the contact_infos table.
#[derive(Debug, Clone, FromRow)]
pub struct ContactInfoEntity {
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

impl From<ContactInfoEntity> for domain::models::ContactInfo {
    fn from(entity: ContactInfoEntity) -> Self {
        Self {
            id: entity.id,
            company_name: entity.company_name,
            tagline: entity.tagline,
            address_line_1: entity.address_line_1,
            address_line_2: entity.address_line_2,
            city: entity.city,
            state: entity.state,
            country: entity.country,
            pin_code: entity.pin_code,
            primary_phone: entity.primary_phone,
            secondary_phone: entity.secondary_phone,
            whatsapp_number: entity.whatsapp_number,
            primary_email: entity.primary_email,
            secondary_email: entity.secondary_email,
            website_url: entity.website_url,
            facebook_url: entity.facebook_url,
            instagram_url: entity.instagram_url,
            linkedin_url: entity.linkedin_url,
            whatsapp_url: entity.whatsapp_url,
            twitter_url: entity.twitter_url,
            youtube_url: entity.youtube_url,
            working_hours_weekdays: entity.working_hours_weekdays,
            working_hours_weekend: entity.working_hours_weekend,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
