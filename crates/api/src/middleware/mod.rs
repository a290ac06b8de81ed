//! HTTP middleware components.

pub mod admin_audit;
pub mod admin_auth;
pub mod logging;
pub mod metrics;
pub mod rate_limit;
pub mod security_headers;
pub mod trace_id;

pub use admin_audit::admin_audit_middleware;
pub use admin_auth::{require_admin, LoginRedirect};
pub use metrics::{init_metrics, metrics_handler, metrics_middleware};
pub use rate_limit::RateLimiterState;
pub use security_headers::{security_headers_middleware, SecurityPolicy};
pub use trace_id::{trace_id, RequestId, REQUEST_ID_HEADER};
