// codetrack - competitive-programming stats aggregation core
//
// Pulls per-user stats from LeetCode (GraphQL), CodeChef (profile scrape)
// and HackerRank (REST), merges them into one record and caches the result
// for five minutes. Authentication, persistence and the HTTP layer that
// exposes this live elsewhere; they hand in a UsernameSet and get back an
// AggregatedStats (or a PlatformError with an HTTP status mapping).

pub mod aggregator;
pub mod api;
pub mod cache;
pub mod error;
pub mod models;
pub mod utils;

pub use aggregator::aggregate;
pub use cache::StatsCache;
pub use error::PlatformError;
pub use models::stats::{AggregatedStats, LeetCodeStats, PlatformStatus, UsernameSet};

/// Process-wide service state: one shared HTTP client and one cache.
/// Construct once at startup and hand out references.
pub struct StatsService {
    http_client: reqwest::Client,
    cache: StatsCache,
}

impl StatsService {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            cache: StatsCache::new(),
        }
    }

    /// Aggregated stats for one user's linked platforms, served from
    /// cache when a fresh entry exists.
    pub async fn get_stats(
        &self,
        usernames: &UsernameSet,
    ) -> Result<AggregatedStats, PlatformError> {
        // Validate up front so bad input never reaches the cache
        usernames.validate()?;

        let key = usernames.cache_key();
        self.cache
            .get_or_fetch(&key, || aggregator::aggregate(&self.http_client, usernames))
            .await
    }
}
