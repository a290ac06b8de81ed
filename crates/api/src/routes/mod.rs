//! HTTP route handlers.

pub mod admin_about;
pub mod admin_contact_info;
pub mod admin_gallery;
pub mod admin_media;
pub mod admin_projects;
pub mod admin_services;
pub mod admin_session;
pub mod admin_submissions;
pub mod assets;
pub mod contact;
pub mod health;
pub mod pages;
