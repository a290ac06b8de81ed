//! Descriptors for ranked public listings.

/// Number of featured projects on the homepage.
pub const HOMEPAGE_FEATURED_PROJECTS: i64 = 3;

/// Number of featured gallery items on the homepage.
pub const HOMEPAGE_FEATURED_GALLERY: i64 = 2;

/// Which slice of a ranked collection to return.
///
/// Listings always exclude inactive records. The ordering is fixed per entity
/// and ends with the id, so a limited listing is a prefix of the unlimited one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Listing {
    pub featured_only: bool,
    pub limit: Option<i64>,
}

impl Listing {
    /// Every active record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Active featured records, optionally capped.
    pub fn featured(limit: Option<i64>) -> Self {
        Self {
            featured_only: true,
            limit,
        }
    }

    /// Limit as a SQL bind value; `None` maps to no limit.
    pub fn sql_limit(&self) -> Option<i64> {
        self.limit.map(|l| l.max(0))
    }
}
