//! Per-client rate limiting for the contact endpoints.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use domain::models::ContactResponse;
use governor::{
    clock::{Clock, DefaultClock},
    DefaultKeyedRateLimiter, Quota, RateLimiter,
};
use std::{
    net::{IpAddr, Ipv4Addr},
    num::NonZeroU32,
    sync::atomic::{AtomicU64, Ordering},
};

pub const MSG_RATE_LIMITED: &str = "Too many submissions. Please try again later.";

/// Checks between sweeps of client state that has fully replenished.
const PRUNE_EVERY: u64 = 1024;

/// One keyed limiter over client addresses.
///
/// Requests without a known peer address share one bucket. Clients whose
/// bucket is full again are dropped every [`PRUNE_EVERY`] checks, so the
/// state stays proportional to recently active clients.
pub struct RateLimiterState {
    limiter: DefaultKeyedRateLimiter<IpAddr>,
    checks: AtomicU64,
    rate_limit_per_minute: u32,
}

impl RateLimiterState {
    /// Returns `None` when `rate_limit_per_minute` is zero (limiting off).
    pub fn new(rate_limit_per_minute: u32) -> Option<Self> {
        let per_minute = NonZeroU32::new(rate_limit_per_minute)?;
        Some(Self::with_quota(
            Quota::per_minute(per_minute),
            rate_limit_per_minute,
        ))
    }

    fn with_quota(quota: Quota, rate_limit_per_minute: u32) -> Self {
        Self {
            limiter: RateLimiter::keyed(quota),
            checks: AtomicU64::new(0),
            rate_limit_per_minute,
        }
    }

    /// `Ok(())` if allowed, otherwise the seconds to wait (at least 1).
    pub fn check(&self, ip: Option<IpAddr>) -> Result<(), u64> {
        let key = ip.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

        if self.checks.fetch_add(1, Ordering::Relaxed) % PRUNE_EVERY == PRUNE_EVERY - 1 {
            self.prune();
        }

        self.limiter.check_key(&key).map_err(|not_until| {
            not_until
                .wait_time_from(DefaultClock::default().now())
                .as_secs()
                .max(1)
        })
    }

    /// Forgets clients whose bucket has fully replenished.
    pub fn prune(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    /// Number of clients currently holding limiter state.
    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }

    pub fn rate_limit_per_minute(&self) -> u32 {
        self.rate_limit_per_minute
    }
}

impl std::fmt::Debug for RateLimiterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiterState")
            .field("rate_limit_per_minute", &self.rate_limit_per_minute)
            .field("tracked_clients", &self.tracked_clients())
            .finish()
    }
}

/// `429` with a `Retry-After` header and the contact JSON body.
pub fn rate_limited_response(retry_after: u64) -> Response {
    let mut response = (
        StatusCode::TOO_MANY_REQUESTS,
        Json(ContactResponse::failed(MSG_RATE_LIMITED)),
    )
        .into_response();

    if let Ok(value) = HeaderValue::from_str(&retry_after.to_string()) {
        response.headers_mut().insert(header::RETRY_AFTER, value);
    }

    response
}
