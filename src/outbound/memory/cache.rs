//! In-memory listing cache with TTL expiry and prefix invalidation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;

use crate::domain::ports::{ListingCache, ListingCacheError, ListingCacheKey, ListingCachePrefix};

struct CacheEntry {
    value: serde_json::Value,
    expires_at: DateTime<Utc>,
}

/// Listing cache backed by a mutex-guarded map.
///
/// Expiry is lazy: stale entries answer as misses on read and are dropped
/// then, so TTL behaviour follows the injected clock rather than wall time.
pub struct InMemoryListingCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryListingCache {
    /// Create an empty cache expiring entries against `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    fn guard(&self) -> Result<MutexGuard<'_, HashMap<String, CacheEntry>>, ListingCacheError> {
        self.entries
            .lock()
            .map_err(|_| ListingCacheError::backend("listing cache mutex poisoned"))
    }
}

#[async_trait]
impl ListingCache for InMemoryListingCache {
    async fn get(
        &self,
        key: &ListingCacheKey,
    ) -> Result<Option<serde_json::Value>, ListingCacheError> {
        let now = self.clock.utc();
        let mut entries = self.guard()?;
        match entries.get(key.as_str()) {
            Some(entry) if entry.expires_at > now => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key.as_str());
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn put(
        &self,
        key: &ListingCacheKey,
        page: &serde_json::Value,
        ttl: Duration,
    ) -> Result<(), ListingCacheError> {
        let ttl = TimeDelta::from_std(ttl)
            .map_err(|err| ListingCacheError::serialization(err.to_string()))?;
        let entry = CacheEntry {
            value: page.clone(),
            expires_at: self.clock.utc() + ttl,
        };
        self.guard()?.insert(key.as_str().to_owned(), entry);
        Ok(())
    }

    async fn invalidate_prefix(
        &self,
        prefix: &ListingCachePrefix,
    ) -> Result<(), ListingCacheError> {
        self.guard()?
            .retain(|key, _| !key.starts_with(prefix.as_str()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use std::sync::atomic::{AtomicI64, Ordering};

    use chrono::{Local, TimeZone};

    use super::*;
    use crate::domain::UserId;

    struct SteppingClock {
        base: DateTime<Utc>,
        offset_secs: AtomicI64,
    }

    impl SteppingClock {
        fn at(base: DateTime<Utc>) -> Self {
            Self {
                base,
                offset_secs: AtomicI64::new(0),
            }
        }

        fn advance(&self, secs: i64) {
            self.offset_secs.fetch_add(secs, Ordering::SeqCst);
        }
    }

    impl Clock for SteppingClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.base + TimeDelta::seconds(self.offset_secs.load(Ordering::SeqCst))
        }
    }

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    #[tokio::test]
    async fn entries_expire_after_their_ttl() {
        let clock = Arc::new(SteppingClock::at(base()));
        let cache = InMemoryListingCache::new(Arc::clone(&clock) as Arc<dyn Clock>);
        let key = ListingCacheKey::user_page(&UserId::random(), 1);
        let page = serde_json::json!([{"id": "a"}]);

        cache
            .put(&key, &page, Duration::from_secs(60))
            .await
            .expect("put succeeds");
        assert_eq!(
            cache.get(&key).await.expect("get succeeds"),
            Some(page.clone())
        );

        clock.advance(61);
        assert_eq!(cache.get(&key).await.expect("get succeeds"), None);
    }

    #[tokio::test]
    async fn prefix_invalidation_drops_only_the_users_pages() {
        let clock = Arc::new(SteppingClock::at(base()));
        let cache = InMemoryListingCache::new(clock as Arc<dyn Clock>);
        let user = UserId::random();
        let other = UserId::random();
        let page = serde_json::json!([]);

        for target in [&user, &other] {
            for page_no in 1..=2 {
                cache
                    .put(
                        &ListingCacheKey::user_page(target, page_no),
                        &page,
                        Duration::from_secs(3600),
                    )
                    .await
                    .expect("put succeeds");
            }
        }

        cache
            .invalidate_prefix(&ListingCachePrefix::user_listings(&user))
            .await
            .expect("invalidation succeeds");

        for page_no in 1..=2 {
            assert_eq!(
                cache
                    .get(&ListingCacheKey::user_page(&user, page_no))
                    .await
                    .expect("get succeeds"),
                None
            );
            assert!(
                cache
                    .get(&ListingCacheKey::user_page(&other, page_no))
                    .await
                    .expect("get succeeds")
                    .is_some()
            );
        }
    }
}
