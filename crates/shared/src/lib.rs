//! Shared utilities for the Mechfab site backend.
//!
//! This crate provides helpers used across the other crates:
//! - Token generation and SHA-256 hashing for admin sessions
//! - Password hashing with Argon2id
//! - Form-field validation helpers
//! - Cursor pagination for admin listings

pub mod crypto;
pub mod pagination;
pub mod password;
pub mod validation;
