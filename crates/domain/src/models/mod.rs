//! Domain models for the Mechfab site.

pub mod about;
pub mod admin;
pub mod contact_info;
pub mod contact_submission;
pub mod gallery;
pub mod media;
pub mod project;
pub mod service;

pub use about::AboutSection;
pub use admin::{AdminSession, AdminUser};
pub use contact_info::ContactInfo;
pub use contact_submission::{ClientMeta, ContactResponse, ContactSubmission, SubmissionStatus};
pub use gallery::{GalleryCategory, GalleryItem, MediaType};
pub use project::Project;
pub use service::Service;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_types_reachable_from_models() {
        let meta = ClientMeta::default();
        assert!(meta.ip_address.is_none());

        let json = serde_json::to_value(ContactResponse::failed("Invalid request format.")).unwrap();
        assert_eq!(json["success"], false);
    }
}
