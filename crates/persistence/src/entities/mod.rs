//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod about;
pub mod admin;
pub mod contact_info;
pub mod contact_submission;
pub mod gallery;
pub mod project;
pub mod service;

pub use about::AboutSectionEntity;
pub use admin::{AdminSessionEntity, AdminUserEntity};
pub use contact_info::ContactInfoEntity;
pub use contact_submission::{ContactSubmissionEntity, SubmissionStatusDb};
pub use gallery::{GalleryCategoryDb, GalleryItemEntity, MediaTypeDb};
pub use project::ProjectEntity;
pub use service::ServiceEntity;
