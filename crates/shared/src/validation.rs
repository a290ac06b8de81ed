//! Common validation utilities for form and admin input.

use validator::ValidationError;

/// Pattern every stored slug must match.
pub const SLUG_PATTERN: &str = r"^[a-z0-9]+(-[a-z0-9]+)*$";

/// Returns `true` when the value is empty after trimming whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates that a text field is not blank.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        let mut err = ValidationError::new("blank");
        err.message = Some("This field cannot be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates that a value is already in slug form (`lowercase-words-123`).
pub fn validate_slug_format(value: &str) -> Result<(), ValidationError> {
    let valid = !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if valid {
        Ok(())
    } else {
        let mut err = ValidationError::new("slug_format");
        err.message = Some(
            format!(
                "Slug must match {} (lowercase letters, digits and single hyphens)",
                SLUG_PATTERN
            )
            .into(),
        );
        Err(err)
    }
}

/// Validates that an external media reference is an absolute http(s) URL.
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || value.starts_with("https://") || value.starts_with("http://") {
        Ok(())
    } else {
        let mut err = ValidationError::new("url_scheme");
        err.message = Some("URL must start with http:// or https://".into());
        Err(err)
    }
}

/// Validates that a stored media path is relative and cannot escape the media root.
pub fn validate_media_path(value: &str) -> Result<(), ValidationError> {
    let escapes = value.starts_with('/')
        || value.contains('\\')
        || value.split('/').any(|segment| segment == ".." || segment.is_empty());

    if escapes {
        let mut err = ValidationError::new("media_path");
        err.message = Some("Media path must be relative to the media root".into());
        Err(err)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   \t\n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_validate_not_blank_message() {
        let err = validate_not_blank("  ").unwrap_err();
        assert_eq!(err.code, "blank");
        assert_eq!(
            err.message.unwrap().to_string(),
            "This field cannot be blank"
        );
        assert!(validate_not_blank("Name").is_ok());
    }

    #[test]
    fn test_validate_slug_format() {
        assert!(validate_slug_format("industrial-hvac-system").is_ok());
        assert!(validate_slug_format("project-2").is_ok());
        assert!(validate_slug_format("Industrial").is_err());
        assert!(validate_slug_format("-leading").is_err());
        assert!(validate_slug_format("trailing-").is_err());
        assert!(validate_slug_format("double--hyphen").is_err());
        assert!(validate_slug_format("").is_err());
        assert!(validate_slug_format("with space").is_err());
    }

    #[test]
    fn test_validate_http_url() {
        assert!(validate_http_url("https://res.cloudinary.com/a.jpg").is_ok());
        assert!(validate_http_url("http://example.com").is_ok());
        assert!(validate_http_url("").is_ok());
        assert!(validate_http_url("javascript:alert(1)").is_err());
        assert!(validate_http_url("ftp://example.com/file").is_err());
    }

    #[test]
    fn test_validate_media_path() {
        assert!(validate_media_path("projects/hvac.jpg").is_ok());
        assert!(validate_media_path("gallery/thumbnails/a.png").is_ok());
        assert!(validate_media_path("/etc/passwd").is_err());
        assert!(validate_media_path("../secret").is_err());
        assert!(validate_media_path("gallery//a.png").is_err());
        assert!(validate_media_path("gallery\\a.png").is_err());
    }
}
