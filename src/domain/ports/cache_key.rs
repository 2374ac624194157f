//! Cache key derivation for paginated listing entries.
//!
//! Keys are namespaced as `user:{id}:appointments:{page}` so every page
//! belonging to one user shares the `user:{id}:appointments` prefix and can
//! be dropped in a single prefix invalidation.

use crate::domain::UserId;

/// Cache key addressing one cached listing page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingCacheKey(String);

impl ListingCacheKey {
    /// Key for one page of a user's appointment listing.
    pub fn user_page(user_id: &UserId, page: u32) -> Self {
        Self(format!("user:{user_id}:appointments:{page}"))
    }

    /// Borrow the underlying key as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for ListingCacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ListingCacheKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Prefix covering every cached listing page of one user.
///
/// Full-prefix drop is the only supported invalidation; page contents shift
/// when underlying rows change, so targeting a single page is never correct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingCachePrefix(String);

impl ListingCachePrefix {
    /// Prefix for all of a user's cached listing pages.
    pub fn user_listings(user_id: &UserId) -> Self {
        Self(format!("user:{user_id}:appointments"))
    }

    /// Borrow the underlying prefix as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether a key falls under this prefix.
    pub fn covers(&self, key: &ListingCacheKey) -> bool {
        key.as_str().starts_with(self.as_str())
    }
}

impl std::fmt::Display for ListingCachePrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
