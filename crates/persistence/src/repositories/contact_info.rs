//! Contact info repository.

use domain::errors::ContentError;
use domain::models::contact_info::{CreateContactInfoRequest, UpdateContactInfoRequest};
use domain::services::SingletonKind;
use sqlx::PgPool;

use super::singleton;
use crate::entities::contact_info::CONTACT_INFO_COLUMNS;
use crate::entities::ContactInfoEntity;
use crate::metrics::QueryTimer;

const KIND: SingletonKind = SingletonKind::ContactInfo;

/// Repository for the contact_infos table.
#[derive(Clone)]
pub struct ContactInfoRepository {
    pool: PgPool,
}

impl ContactInfoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// The record to display: the active one, else the most recently updated.
    pub async fn find_active(&self) -> Result<Option<ContactInfoEntity>, sqlx::Error> {
        singleton::find_active(&self.pool, KIND, CONTACT_INFO_COLUMNS).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ContactInfoEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_contact_info_by_id");
        let sql = format!(
            "SELECT {} FROM contact_infos WHERE id = $1",
            CONTACT_INFO_COLUMNS
        );
        let result = sqlx::query_as::<_, ContactInfoEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn list_all(&self) -> Result<Vec<ContactInfoEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_contact_infos");
        let sql = format!(
            "SELECT {} FROM contact_infos ORDER BY updated_at DESC, id DESC",
            CONTACT_INFO_COLUMNS
        );
        let result = sqlx::query_as::<_, ContactInfoEntity>(&sql)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        singleton::count(&self.pool, KIND).await
    }

    /// Creates a record. An active record replaces the current one.
    pub async fn create(
        &self,
        req: &CreateContactInfoRequest,
    ) -> Result<ContactInfoEntity, ContentError> {
        let timer = QueryTimer::new("create_contact_info");
        let mut tx = self.pool.begin().await?;

        if req.is_active {
            singleton::lock_and_clear_active(&mut tx, KIND, None).await?;
        }

        let sql = format!(
            r#"
            INSERT INTO contact_infos (
                company_name, tagline, address_line_1, address_line_2, city, state, country,
                pin_code, primary_phone, secondary_phone, whatsapp_number, primary_email,
                secondary_email, website_url, facebook_url, instagram_url, linkedin_url,
                whatsapp_url, twitter_url, youtube_url, working_hours_weekdays,
                working_hours_weekend, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                    $17, $18, $19, $20, $21, $22, $23)
            RETURNING {}
            "#,
            CONTACT_INFO_COLUMNS
        );
        let entity = sqlx::query_as::<_, ContactInfoEntity>(&sql)
            .bind(&req.company_name)
            .bind(&req.tagline)
            .bind(&req.address_line_1)
            .bind(&req.address_line_2)
            .bind(&req.city)
            .bind(&req.state)
            .bind(&req.country)
            .bind(&req.pin_code)
            .bind(&req.primary_phone)
            .bind(&req.secondary_phone)
            .bind(&req.whatsapp_number)
            .bind(&req.primary_email)
            .bind(&req.secondary_email)
            .bind(&req.website_url)
            .bind(&req.facebook_url)
            .bind(&req.instagram_url)
            .bind(&req.linkedin_url)
            .bind(&req.whatsapp_url)
            .bind(&req.twitter_url)
            .bind(&req.youtube_url)
            .bind(&req.working_hours_weekdays)
            .bind(&req.working_hours_weekend)
            .bind(req.is_active)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        timer.record();
        Ok(entity)
    }

    /// Updates a record. Setting `is_active` to true deactivates the others.
    pub async fn update(
        &self,
        id: i64,
        req: &UpdateContactInfoRequest,
    ) -> Result<ContactInfoEntity, ContentError> {
        let timer = QueryTimer::new("update_contact_info");
        let mut tx = self.pool.begin().await?;

        if req.is_active == Some(true) {
            singleton::lock_and_clear_active(&mut tx, KIND, Some(id)).await?;
        }

        let sql = format!(
            r#"
            UPDATE contact_infos
            SET
                company_name = COALESCE($2, company_name),
                tagline = COALESCE($3, tagline),
                address_line_1 = COALESCE($4, address_line_1),
                address_line_2 = COALESCE($5, address_line_2),
                city = COALESCE($6, city),
                state = COALESCE($7, state),
                country = COALESCE($8, country),
                pin_code = COALESCE($9, pin_code),
                primary_phone = COALESCE($10, primary_phone),
                secondary_phone = COALESCE($11, secondary_phone),
                whatsapp_number = COALESCE($12, whatsapp_number),
                primary_email = COALESCE($13, primary_email),
                secondary_email = COALESCE($14, secondary_email),
                website_url = COALESCE($15, website_url),
                facebook_url = COALESCE($16, facebook_url),
                instagram_url = COALESCE($17, instagram_url),
                linkedin_url = COALESCE($18, linkedin_url),
                whatsapp_url = COALESCE($19, whatsapp_url),
                twitter_url = COALESCE($20, twitter_url),
                youtube_url = COALESCE($21, youtube_url),
                working_hours_weekdays = COALESCE($22, working_hours_weekdays),
                working_hours_weekend = COALESCE($23, working_hours_weekend),
                is_active = COALESCE($24, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            CONTACT_INFO_COLUMNS
        );
        let entity = sqlx::query_as::<_, ContactInfoEntity>(&sql)
            .bind(id)
            .bind(req.company_name.as_deref())
            .bind(req.tagline.as_deref())
            .bind(req.address_line_1.as_deref())
            .bind(req.address_line_2.as_deref())
            .bind(req.city.as_deref())
            .bind(req.state.as_deref())
            .bind(req.country.as_deref())
            .bind(req.pin_code.as_deref())
            .bind(req.primary_phone.as_deref())
            .bind(req.secondary_phone.as_deref())
            .bind(req.whatsapp_number.as_deref())
            .bind(req.primary_email.as_deref())
            .bind(req.secondary_email.as_deref())
            .bind(req.website_url.as_deref())
            .bind(req.facebook_url.as_deref())
            .bind(req.instagram_url.as_deref())
            .bind(req.linkedin_url.as_deref())
            .bind(req.whatsapp_url.as_deref())
            .bind(req.twitter_url.as_deref())
            .bind(req.youtube_url.as_deref())
            .bind(req.working_hours_weekdays.as_deref())
            .bind(req.working_hours_weekend.as_deref())
            .bind(req.is_active)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| ContentError::NotFound(format!("Contact info {} not found", id)))?;

        tx.commit().await?;
        timer.record();
        Ok(entity)
    }

    pub async fn activate(&self, id: i64) -> Result<ContactInfoEntity, ContentError> {
        singleton::activate(&self.pool, KIND, CONTACT_INFO_COLUMNS, id).await
    }

    /// Deletes a record; the only active record is protected.
    pub async fn delete(&self, id: i64) -> Result<(), ContentError> {
        singleton::delete(&self.pool, KIND, id).await
    }
}
