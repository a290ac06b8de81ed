//! Keyset pagination for newest-first admin listings.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Default number of rows per admin page.
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Upper bound on the requested page size.
pub const MAX_PAGE_SIZE: i64 = 200;

/// Error type for cursor operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CursorError {
    #[error("Invalid cursor format")]
    InvalidFormat,
    #[error("Invalid cursor encoding")]
    InvalidEncoding,
    #[error("Invalid timestamp in cursor")]
    InvalidTimestamp,
    #[error("Invalid ID in cursor")]
    InvalidId,
}

/// Position after the last row of a page, ordered by `(timestamp DESC, id DESC)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub timestamp: DateTime<Utc>,
    pub id: i64,
}

impl Cursor {
    pub fn new(timestamp: DateTime<Utc>, id: i64) -> Self {
        Self { timestamp, id }
    }

    /// Encodes the cursor as `base64(RFC3339_timestamp:id)`.
    ///
    /// The id makes the cursor unique when several rows share a timestamp.
    pub fn encode(&self) -> String {
        let raw = format!(
            "{}:{}",
            self.timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            self.id
        );
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    pub fn decode(cursor: &str) -> Result<Self, CursorError> {
        let decoded = URL_SAFE_NO_PAD
            .decode(cursor)
            .map_err(|_| CursorError::InvalidEncoding)?;
        let s = String::from_utf8(decoded).map_err(|_| CursorError::InvalidFormat)?;

        // The timestamp itself contains colons.
        let colon_pos = s.rfind(':').ok_or(CursorError::InvalidFormat)?;
        let id: i64 = s[colon_pos + 1..]
            .parse()
            .map_err(|_| CursorError::InvalidId)?;
        let timestamp = DateTime::parse_from_rfc3339(&s[..colon_pos])
            .map_err(|_| CursorError::InvalidTimestamp)?
            .with_timezone(&Utc);

        Ok(Self { timestamp, id })
    }
}

/// Clamps a requested page size into `1..=MAX_PAGE_SIZE`.
pub fn clamp_page_size(requested: Option<i64>) -> i64 {
    requested
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE)
}

/// A page of results with the cursor for the next page, if any.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// Builds a page from `limit + 1` fetched rows.
    ///
    /// The extra row only signals that another page exists; it is dropped and
    /// the cursor points at the last row kept.
    pub fn from_overfetch<F>(mut rows: Vec<T>, limit: i64, key: F) -> Self
    where
        F: Fn(&T) -> Cursor,
    {
        let limit = limit.max(0) as usize;
        let has_more = rows.len() > limit;
        rows.truncate(limit);
        let next_cursor = if has_more {
            rows.last().map(|row| key(row).encode())
        } else {
            None
        };
        Self {
            data: rows,
            next_cursor,
        }
    }
}
