//! Admin accounts and sessions for the administrative area.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// An account allowed into the administrative area.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// An authenticated admin session, attached to request extensions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AdminSession {
    pub id: Uuid,
    pub admin_user_id: i64,
    pub username: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Login form fields.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginForm {
    #[validate(length(min = 1, max = 150, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, max = 1024, message = "Password is required"))]
    pub password: String,

    /// Path to return to after signing in.
    pub next: Option<String>,
}

/// Returns the redirect target after login.
///
/// Only local paths inside `admin_prefix` are honored; anything else falls
/// back to the admin landing page.
pub fn safe_next_path(next: Option<&str>, admin_prefix: &str) -> String {
    let landing = format!("{}/", admin_prefix);
    match next {
        Some(path)
            if !path.starts_with("//")
                && !path.contains('\\')
                && !path.contains("://")
                && (path == admin_prefix
                    || path.starts_with(&landing)
                    || path.starts_with(&format!("{}?", admin_prefix))) =>
        {
            path.to_string()
        }
        _ => landing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_safe_next_path_accepts_admin_paths() {
        assert_eq!(
            safe_next_path(Some("/admin/api/submissions"), "/admin"),
            "/admin/api/submissions"
        );
        assert_eq!(safe_next_path(Some("/admin"), "/admin"), "/admin");
    }

    #[test]
    fn test_safe_next_path_rejects_foreign_targets() {
        assert_eq!(safe_next_path(None, "/admin"), "/admin/");
        assert_eq!(safe_next_path(Some("https://evil.example/admin/"), "/admin"), "/admin/");
        assert_eq!(safe_next_path(Some("//evil.example/admin/"), "/admin"), "/admin/");
        assert_eq!(safe_next_path(Some("/gallery/"), "/admin"), "/admin/");
        assert_eq!(safe_next_path(Some("/administrator"), "/admin"), "/admin/");
    }

    #[test]
    fn test_custom_prefix() {
        assert_eq!(
            safe_next_path(Some("/backoffice/api/about"), "/backoffice"),
            "/backoffice/api/about"
        );
        assert_eq!(safe_next_path(Some("/admin/"), "/backoffice"), "/backoffice/");
    }

    #[test]
    fn test_session_expiry() {
        let now = Utc::now();
        let session = AdminSession {
            id: Uuid::new_v4(),
            admin_user_id: 1,
            username: "owner".into(),
            expires_at: now + Duration::hours(1),
            created_at: now,
        };
        assert!(!session.is_expired_at(now));
        assert!(session.is_expired_at(now + Duration::hours(2)));
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = AdminUser {
            id: 1,
            username: "owner".into(),
            password_hash: "$argon2id$secret".into(),
            is_active: true,
            created_at: Utc::now(),
            last_login_at: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
