//! Domain layer for the Mechfab site backend.
//!
//! This crate contains:
//! - Domain models (About, ContactInfo, Service, Project, GalleryItem, ContactSubmission)
//! - Business rules (slugs, singleton selection, ranked listings, seed content)
//! - Domain error types

pub mod errors;
pub mod models;
pub mod services;
