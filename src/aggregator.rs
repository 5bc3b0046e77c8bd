// Cross-platform stats aggregation
//
// One fetch per linked platform, run concurrently; outcomes are merged
// independently so a failing or skipped platform never blocks the rest.
// Request latency is bounded by the slowest adapter, not the sum.

use chrono::Utc;
use tracing::{info, warn};

use crate::api::{codechef, hackerrank, leetcode};
use crate::error::PlatformError;
use crate::models::stats::{
    AggregatedStats, LeetCodeStats, PlatformStatus, PlatformStatuses, UsernameSet,
};
use crate::utils::config;
use crate::utils::ranking::synthesize_ranking_history;

/// Per-platform fetch outcome before merging
enum Outcome<T> {
    Skipped,
    Ready(T),
    Failed(PlatformError),
}

/// Fetch and merge stats for every linked platform.
///
/// Platforms without a username are skipped outright: no request is ever
/// built for them and they contribute zeroed values. A platform that was
/// queried but failed contributes zeroed values plus a failure status.
pub async fn aggregate(
    client: &reqwest::Client,
    usernames: &UsernameSet,
) -> Result<AggregatedStats, PlatformError> {
    usernames.validate()?;

    let leetcode_fut = async {
        match usernames.leetcode() {
            Some(name) => match leetcode::fetch_stats(client, name).await {
                Ok(stats) => Outcome::Ready(stats),
                Err(err) => {
                    warn!("LeetCode fetch failed for {}: {}", name, err);
                    Outcome::Failed(err)
                }
            },
            None => Outcome::Skipped,
        }
    };

    let codechef_fut = async {
        match usernames.codechef() {
            Some(name) => Outcome::Ready(codechef::fetch_rating(client, name).await),
            None => Outcome::Skipped,
        }
    };

    let hackerrank_fut = async {
        match usernames.hackerrank() {
            Some(name) => Outcome::Ready(hackerrank::fetch_points(client, name).await),
            None => Outcome::Skipped,
        }
    };

    let (lc, cc, hr) = tokio::join!(leetcode_fut, codechef_fut, hackerrank_fut);

    let stats = assemble(lc, cc, hr);
    info!(
        "Aggregated stats for {}: leetcode {:?}, codechef {}, hackerrank {}",
        usernames.cache_key(),
        stats.platforms.leetcode,
        stats.codechef_rating,
        stats.hackerrank_points
    );
    Ok(stats)
}

fn assemble(
    leetcode: Outcome<LeetCodeStats>,
    codechef: Outcome<u32>,
    hackerrank: Outcome<u32>,
) -> AggregatedStats {
    let (leetcode_stats, leetcode_status) = match leetcode {
        Outcome::Ready(stats) => (Some(stats), PlatformStatus::Ok),
        Outcome::Skipped => (None, PlatformStatus::Skipped),
        Outcome::Failed(err) => (None, failed(err)),
    };

    let (codechef_rating, codechef_history, codechef_status) = match codechef {
        Outcome::Ready(rating) => (
            rating,
            synthesize_ranking_history(config::CODECHEF_BASE_RANKING, config::HISTORY_POINTS),
            PlatformStatus::Ok,
        ),
        Outcome::Skipped => (0, Vec::new(), PlatformStatus::Skipped),
        Outcome::Failed(err) => (0, Vec::new(), failed(err)),
    };

    let (hackerrank_points, hackerrank_history, hackerrank_status) = match hackerrank {
        Outcome::Ready(points) => (
            points,
            synthesize_ranking_history(config::HACKERRANK_BASE_RANKING, config::HISTORY_POINTS),
            PlatformStatus::Ok,
        ),
        Outcome::Skipped => (0, Vec::new(), PlatformStatus::Skipped),
        Outcome::Failed(err) => (0, Vec::new(), failed(err)),
    };

    AggregatedStats {
        leetcode: leetcode_stats,
        codechef_rating,
        codechef_ranking_history: codechef_history,
        hackerrank_points,
        hackerrank_ranking_history: hackerrank_history,
        platforms: PlatformStatuses {
            leetcode: leetcode_status,
            codechef: codechef_status,
            hackerrank: hackerrank_status,
        },
        fetched_at: Utc::now(),
    }
}

fn failed(err: PlatformError) -> PlatformStatus {
    PlatformStatus::Failed {
        message: err.to_string(),
    }
}
