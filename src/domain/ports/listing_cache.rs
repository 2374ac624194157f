//! Port for the listing-page cache.
//!
//! Cache reads and writes are not transactional with the appointment store;
//! callers tolerate a brief stale window bounded by the invalidation call
//! that follows every store commit. Cache faults never fail a request.

use std::time::Duration;

use async_trait::async_trait;

use super::{ListingCacheKey, ListingCachePrefix};

/// Errors surfaced by the caching adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListingCacheError {
    /// Cache backend is unavailable or timing out.
    #[error("listing cache backend failure: {message}")]
    Backend { message: String },
    /// Serialisation or deserialisation of cached content failed.
    #[error("listing cache serialisation failed: {message}")]
    Serialization { message: String },
}

impl ListingCacheError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

/// Port for cached listing pages with TTL and prefix invalidation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingCache: Send + Sync {
    /// Read a cached page for the given key.
    async fn get(&self, key: &ListingCacheKey)
    -> Result<Option<serde_json::Value>, ListingCacheError>;

    /// Store a serialized page under the key with the supplied TTL.
    async fn put(
        &self,
        key: &ListingCacheKey,
        page: &serde_json::Value,
        ttl: Duration,
    ) -> Result<(), ListingCacheError>;

    /// Drop every entry whose key begins with the prefix.
    async fn invalidate_prefix(&self, prefix: &ListingCachePrefix)
    -> Result<(), ListingCacheError>;
}

/// Fixture cache that always misses and discards writes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureListingCache;

#[async_trait]
impl ListingCache for FixtureListingCache {
    async fn get(
        &self,
        _key: &ListingCacheKey,
    ) -> Result<Option<serde_json::Value>, ListingCacheError> {
        Ok(None)
    }

    async fn put(
        &self,
        _key: &ListingCacheKey,
        _page: &serde_json::Value,
        _ttl: Duration,
    ) -> Result<(), ListingCacheError> {
        Ok(())
    }

    async fn invalidate_prefix(
        &self,
        _prefix: &ListingCachePrefix,
    ) -> Result<(), ListingCacheError> {
        Ok(())
    }
}
