// Tuning constants for upstream fetching and caching

use std::time::Duration;

/// Retry attempts after the initial call, transient failures only
pub const MAX_RETRIES: u32 = 3;

/// Fixed wait between retry attempts
pub const RETRY_DELAY: Duration = Duration::from_millis(2000);

/// LeetCode's GraphQL endpoint is slower and stricter than the others
pub const LEETCODE_TIMEOUT: Duration = Duration::from_secs(30);

/// Request timeout for the CodeChef and HackerRank upstreams
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Placeholder ranking for profiles that have never been ranked
pub const UNRANKED_PLACEHOLDER: u32 = 100_000;

/// Number of points in a synthesized ranking-history series
pub const HISTORY_POINTS: usize = 6;

/// Base ranking used to fabricate a CodeChef trend (no history upstream)
pub const CODECHEF_BASE_RANKING: u32 = 50_000;

/// Base ranking used to fabricate a HackerRank trend
pub const HACKERRANK_BASE_RANKING: u32 = 30_000;

/// How long one aggregation result stays fresh
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Max distinct username sets kept in the cache
pub const CACHE_CAPACITY: usize = 256;

/// Browser-like user agent; LeetCode rejects obviously non-browser clients
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";
