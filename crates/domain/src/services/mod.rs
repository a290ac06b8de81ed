//! Business rules for the Mechfab site content.
//!
//! These are pure functions and descriptors; persistence applies them.

pub mod ranking;
pub mod seed;
pub mod singleton;
pub mod slug;

pub use ranking::{Listing, HOMEPAGE_FEATURED_GALLERY, HOMEPAGE_FEATURED_PROJECTS};
pub use singleton::SingletonKind;
pub use slug::{derive_slug, resolve_unique_slug, slug_stem, slugify};
