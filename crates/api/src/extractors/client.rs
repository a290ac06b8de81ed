//! Client address and user agent extraction.

use axum::{
    async_trait,
    extract::{ConnectInfo, FromRequestParts},
    http::{request::Parts, Extensions, HeaderMap},
};
use axum_extra::{headers::UserAgent, TypedHeader};
use domain::models::ClientMeta;
use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

/// Header consulted for the audit log's client address.
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Who sent the request, as stored with a contact submission.
///
/// The address is the direct peer of the connection; forwarding headers are
/// ignored here. Missing information never rejects the request.
#[derive(Debug, Clone, Default)]
pub struct RequestClient(pub ClientMeta);

#[async_trait]
impl<S> FromRequestParts<S> for RequestClient
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user_agent = TypedHeader::<UserAgent>::from_request_parts(parts, state)
            .await
            .map(|TypedHeader(ua)| ua.as_str().to_string())
            .unwrap_or_default();

        Ok(RequestClient(ClientMeta {
            ip_address: connection_ip(&parts.extensions),
            user_agent,
        }))
    }
}

/// The peer address recorded by `into_make_service_with_connect_info`.
pub fn connection_ip(extensions: &Extensions) -> Option<IpAddr> {
    extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
}

/// Client address for security logging.
///
/// First entry of `X-Forwarded-For` when present, else the connection
/// address, else `"unknown"`.
pub fn audit_client_ip(headers: &HeaderMap, connection: Option<IpAddr>) -> String {
    let forwarded = headers
        .get(FORWARDED_FOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    match (forwarded, connection) {
        (Some(ip), _) => ip.to_string(),
        (None, Some(ip)) => ip.to_string(),
        (None, None) => "unknown".to_string(),
    }
}
