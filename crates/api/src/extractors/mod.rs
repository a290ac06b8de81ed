//! Custom request extractors.

pub mod client;

pub use client::{audit_client_ip, connection_ip, RequestClient};
