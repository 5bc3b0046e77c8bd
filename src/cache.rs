// TTL cache in front of the aggregator
//
// One entry per username set, bounded LRU so distinct keys can't grow
// without limit over the process lifetime. Entries are inserted whole
// under one lock and replaced wholesale, never mutated in place. Stale
// entries aren't swept; they're ignored and overwritten on the next fetch.

use std::future::Future;
use std::num::NonZeroUsize;

use lru::LruCache;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};
use tracing::debug;

use crate::error::PlatformError;
use crate::models::stats::AggregatedStats;
use crate::utils::config;

struct CacheEntry {
    data: AggregatedStats,
    fetched_at: Instant,
}

pub struct StatsCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::with_ttl(config::CACHE_TTL, config::CACHE_CAPACITY)
    }

    pub fn with_ttl(ttl: Duration, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Return the cached stats for `key` if still fresh, otherwise run
    /// `fetch` and cache its result.
    ///
    /// Failed fetches are never cached. Two concurrent misses for the same
    /// key may both fetch; the later write wins.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        key: &str,
        fetch: F,
    ) -> Result<AggregatedStats, PlatformError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<AggregatedStats, PlatformError>>,
    {
        {
            let mut entries = self.entries.lock().await;
            if let Some(entry) = entries.get(key) {
                if entry.fetched_at.elapsed() < self.ttl {
                    debug!("Cache hit for {}", key);
                    return Ok(entry.data.clone());
                }
                debug!("Cache entry for {} is stale", key);
            }
        }

        let data = fetch().await?;

        let mut entries = self.entries.lock().await;
        entries.put(
            key.to_string(),
            CacheEntry {
                data: data.clone(),
                fetched_at: Instant::now(),
            },
        );
        Ok(data)
    }
}

impl Default for StatsCache {
    fn default() -> Self {
        Self::new()
    }
}
