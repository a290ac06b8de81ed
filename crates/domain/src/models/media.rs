//! Media reference resolution shared by projects and gallery items.

/// Picks the public source for a media slot.
///
/// An uploaded file wins over an external URL. The file path is relative to
/// the media root and is joined onto `media_prefix` (e.g. `/media`).
/// Returns `None` when neither is set.
pub fn resolve_media_src(file: Option<&str>, url: &str, media_prefix: &str) -> Option<String> {
    match file.map(str::trim).filter(|f| !f.is_empty()) {
        Some(path) => Some(format!(
            "{}/{}",
            media_prefix.trim_end_matches('/'),
            path.trim_start_matches('/')
        )),
        None => {
            let url = url.trim();
            (!url.is_empty()).then(|| url.to_string())
        }
    }
}

/// Normalizes an incoming file reference: blank means "no file".
pub fn normalize_file_ref(file: Option<String>) -> Option<String> {
    file.map(|f| f.trim().to_string()).filter(|f| !f.is_empty())
}
