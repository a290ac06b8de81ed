//! Repository implementations for database operations.

pub mod about;
pub mod admin;
pub mod contact_info;
pub mod contact_submission;
pub mod gallery;
pub mod project;
pub mod service;
mod singleton;

pub use about::AboutRepository;
pub use admin::AdminRepository;
pub use contact_info::ContactInfoRepository;
pub use contact_submission::ContactSubmissionRepository;
pub use gallery::GalleryRepository;
pub use project::ProjectRepository;
pub use service::ServiceRepository;
