//! Persistence layer for the Mechfab site backend.
//!
//! This crate contains:
//! - Connection pool setup and embedded migrations
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - Query timing metrics

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
