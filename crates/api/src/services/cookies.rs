//! Cookie helpers for the admin session and flash notices.

use axum::http::{
    header::{COOKIE, SET_COOKIE},
    HeaderMap, HeaderValue,
};

use crate::config::AdminConfig;

pub const ADMIN_SESSION_COOKIE: &str = "mechfab_admin";
pub const FLASH_COOKIE: &str = "mechfab_flash";
pub const FLASH_MAX_AGE_SECS: i64 = 60;

/// Builds `Set-Cookie` values with the site's security attributes.
#[derive(Debug, Clone)]
pub struct CookieHelper {
    secure: bool,
    admin_path: String,
    session_max_age_secs: i64,
}

impl CookieHelper {
    pub fn new(admin: &AdminConfig) -> Self {
        Self {
            secure: admin.cookie_secure,
            admin_path: admin.path_prefix.clone(),
            session_max_age_secs: admin.session_ttl_hours * 3600,
        }
    }

    /// Session cookie, scoped to the admin prefix.
    pub fn session_cookie(&self, token: &str) -> String {
        self.build_cookie(
            ADMIN_SESSION_COOKIE,
            token,
            &self.admin_path,
            self.session_max_age_secs,
        )
    }

    pub fn clear_session_cookie(&self) -> String {
        self.build_clear_cookie(ADMIN_SESSION_COOKIE, &self.admin_path)
    }

    pub fn flash_cookie(&self, value: &str) -> String {
        self.build_cookie(FLASH_COOKIE, value, "/", FLASH_MAX_AGE_SECS)
    }

    pub fn clear_flash_cookie(&self) -> String {
        self.build_clear_cookie(FLASH_COOKIE, "/")
    }

    fn build_cookie(&self, name: &str, value: &str, path: &str, max_age: i64) -> String {
        let mut cookie = format!(
            "{}={}; Path={}; Max-Age={}; HttpOnly; SameSite=Lax",
            name, value, path, max_age
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }

    fn build_clear_cookie(&self, name: &str, path: &str) -> String {
        let mut cookie = format!(
            "{}=; Path={}; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT; HttpOnly; SameSite=Lax",
            name, path
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

/// Appends a `Set-Cookie` header; values that are not valid header text are dropped.
pub fn append_set_cookie(headers: &mut HeaderMap, cookie: &str) {
    if let Ok(value) = HeaderValue::from_str(cookie) {
        headers.append(SET_COOKIE, value);
    }
}

/// Extracts a cookie value from request headers by name.
pub fn extract_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|cookie_header| cookie_header.split(';'))
        .map(str::trim)
        .find_map(|cookie| {
            let (cookie_name, cookie_value) = cookie.split_once('=')?;
            (cookie_name == name).then_some(cookie_value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_config(cookie_secure: bool) -> AdminConfig {
        AdminConfig {
            cookie_secure,
            ..AdminConfig::default()
        }
    }

    #[test]
    fn test_session_cookie_attributes() {
        let helper = CookieHelper::new(&admin_config(false));
        let cookie = helper.session_cookie("tok");

        assert!(cookie.starts_with("mechfab_admin=tok;"));
        assert!(cookie.contains("Path=/admin"));
        assert!(cookie.contains("Max-Age=43200"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_secure_flag() {
        let helper = CookieHelper::new(&admin_config(true));
        assert!(helper.session_cookie("tok").ends_with("; Secure"));
        assert!(helper.flash_cookie("v").ends_with("; Secure"));
    }

    #[test]
    fn test_flash_cookie_is_short_lived_and_site_wide() {
        let helper = CookieHelper::new(&admin_config(false));
        let cookie = helper.flash_cookie("abc");
        assert!(cookie.starts_with("mechfab_flash=abc;"));
        assert!(cookie.contains("Path=/;"));
        assert!(cookie.contains("Max-Age=60"));
    }

    #[test]
    fn test_clear_cookies() {
        let helper = CookieHelper::new(&admin_config(false));
        let cookie = helper.clear_session_cookie();
        assert!(cookie.starts_with("mechfab_admin=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
        assert!(helper.clear_flash_cookie().contains("Path=/;"));
    }

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("csrftoken=x; mechfab_admin=abc123; mechfab_flash=eyJ9"),
        );

        assert_eq!(extract_cookie(&headers, ADMIN_SESSION_COOKIE), Some("abc123"));
        assert_eq!(extract_cookie(&headers, FLASH_COOKIE), Some("eyJ9"));
        assert_eq!(extract_cookie(&headers, "sessionid"), None);
    }

    #[test]
    fn test_extract_cookie_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("a=1"));
        headers.append(COOKIE, HeaderValue::from_static("mechfab_admin=zz"));
        assert_eq!(extract_cookie(&headers, ADMIN_SESSION_COOKIE), Some("zz"));
    }

    #[test]
    fn test_append_set_cookie() {
        let mut headers = HeaderMap::new();
        append_set_cookie(&mut headers, "a=1");
        append_set_cookie(&mut headers, "b=2");
        append_set_cookie(&mut headers, "bad\nvalue");
        assert_eq!(headers.get_all(SET_COOKIE).iter().count(), 2);
    }
}
