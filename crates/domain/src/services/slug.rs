//! URL slug derivation and collision handling.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::ContentError;

/// Longest slug any content table stores.
pub const MAX_SLUG_LEN: usize = 200;

/// Longest `-N` suffix [`resolve_unique_slug`] can append (`u64::MAX`).
const MAX_SUFFIX_LEN: usize = 21;

lazy_static! {
    static ref NON_SLUG_RUN: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Converts a title into slug form.
///
/// Lower-cases ASCII, collapses every run of other characters into a single
/// hyphen and trims hyphens from both ends. Non-ASCII letters are dropped.
///
/// ```
/// use domain::services::slug::slugify;
///
/// assert_eq!(slugify("Industrial HVAC System"), "industrial-hvac-system");
/// assert_eq!(slugify("Design & Engineering"), "design-engineering");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_ascii_lowercase();
    NON_SLUG_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Derives a slug from a title, rejecting titles with nothing sluggable.
pub fn derive_slug(title: &str) -> Result<String, ContentError> {
    let slug = slugify(title);
    if slug.is_empty() {
        Err(ContentError::Validation(format!(
            "Cannot derive a slug from title '{}'",
            title
        )))
    } else {
        Ok(slug)
    }
}

/// Picks the first free slug among `base`, `base-1`, `base-2`, ...
///
/// `taken` holds the existing slugs that could collide, already excluding the
/// record being saved. Long bases are shortened so the suffixed slug still
/// fits in [`MAX_SLUG_LEN`].
pub fn resolve_unique_slug<S: AsRef<str>>(base: &str, taken: &[S]) -> String {
    let taken: HashSet<&str> = taken.iter().map(AsRef::as_ref).collect();
    let base = truncate_slug(base, MAX_SLUG_LEN);
    if !taken.contains(base.as_str()) {
        return base;
    }

    let mut counter: u64 = 1;
    loop {
        let suffix = format!("-{}", counter);
        let candidate = format!(
            "{}{}",
            truncate_slug(&base, MAX_SLUG_LEN - suffix.len()),
            suffix
        );
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        counter += 1;
    }
}

/// Prefix shared by `base` and every candidate [`resolve_unique_slug`] can
/// produce for it.
///
/// Near [`MAX_SLUG_LEN`] the suffixed candidates are cut shorter than `base`,
/// so collision lookups must match on this stem rather than on `base`.
pub fn slug_stem(base: &str) -> String {
    truncate_slug(base, MAX_SLUG_LEN - MAX_SUFFIX_LEN)
}

fn truncate_slug(slug: &str, max_len: usize) -> String {
    // Slugs are ASCII so byte slicing is safe.
    if slug.len() <= max_len {
        slug.to_string()
    } else {
        slug[..max_len].trim_end_matches('-').to_string()
    }
}
