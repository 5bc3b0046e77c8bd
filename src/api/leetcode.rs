// LeetCode GraphQL API client
// Fetches per-difficulty solved counts plus profile ranking/reputation

use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::PlatformError;
use crate::models::stats::LeetCodeStats;
use crate::utils::config;
use crate::utils::ranking::synthesize_ranking_history;
use crate::utils::retry::fetch_with_retry;

pub const LEETCODE_API: &str = "https://leetcode.com/graphql";

const USER_PROFILE_QUERY: &str = r#"
    query userProfile($username: String!) {
        matchedUser(username: $username) {
            submitStatsGlobal {
                acSubmissionNum {
                    difficulty
                    count
                }
            }
            profile {
                ranking
                reputation
            }
        }
    }
"#;

/// Fetch normalized LeetCode stats for a user.
///
/// Transient transport failures are retried; rate limiting, unknown users
/// and malformed bodies surface as typed errors for the aggregator.
pub async fn fetch_stats(
    client: &reqwest::Client,
    username: &str,
) -> Result<LeetCodeStats, PlatformError> {
    let body = fetch_with_retry(
        || request_profile(client, username),
        config::MAX_RETRIES,
        config::RETRY_DELAY,
    )
    .await?;

    let mut stats = parse_profile_response(&body)?;
    stats.ranking_history = synthesize_ranking_history(stats.ranking, config::HISTORY_POINTS);

    debug!(
        "LeetCode stats for {}: {} solved, ranking {}",
        username, stats.total, stats.ranking
    );
    Ok(stats)
}

async fn request_profile(
    client: &reqwest::Client,
    username: &str,
) -> Result<Value, PlatformError> {
    let payload = json!({
        "query": USER_PROFILE_QUERY,
        "variables": { "username": username },
        "operationName": "userProfile",
    });

    // LeetCode rejects requests that don't look like they came from the
    // site itself, hence the browser header set.
    let response = client
        .post(LEETCODE_API)
        .header("User-Agent", config::BROWSER_USER_AGENT)
        .header("Accept", "application/json")
        .header("Accept-Language", "en-US,en;q=0.9")
        .header("Origin", "https://leetcode.com")
        .header("Referer", "https://leetcode.com/")
        .header("x-requested-with", "XMLHttpRequest")
        .json(&payload)
        .timeout(config::LEETCODE_TIMEOUT)
        .send()
        .await
        .map_err(|e| PlatformError::from_reqwest("LeetCode", e))?;

    if response.status() == StatusCode::TOO_MANY_REQUESTS {
        return Err(PlatformError::TooManyRequests("LeetCode".to_string()));
    }

    response
        .json()
        .await
        .map_err(|e| PlatformError::from_reqwest("LeetCode", e))
}

/// Validate and normalize a raw GraphQL response body.
/// The caller fills in the ranking history afterwards.
fn parse_profile_response(body: &Value) -> Result<LeetCodeStats, PlatformError> {
    if let Some(errors) = body.get("errors").and_then(Value::as_array) {
        let message = errors
            .first()
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("GraphQL error occurred");
        return Err(PlatformError::Upstream(message.to_string()));
    }

    let matched_user = body
        .pointer("/data/matchedUser")
        .filter(|user| !user.is_null())
        .ok_or_else(|| PlatformError::NotFound("user not found on LeetCode".to_string()))?;

    let counts = matched_user
        .pointer("/submitStatsGlobal/acSubmissionNum")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            PlatformError::MalformedResponse(
                "unexpected LeetCode response shape: missing acSubmissionNum".to_string(),
            )
        })?;

    let easy = difficulty_count(counts, "Easy");
    let medium = difficulty_count(counts, "Medium");
    let hard = difficulty_count(counts, "Hard");

    let ranking = matched_user
        .pointer("/profile/ranking")
        .and_then(Value::as_u64)
        .unwrap_or(config::UNRANKED_PLACEHOLDER as u64) as u32;
    let reputation = matched_user
        .pointer("/profile/reputation")
        .and_then(Value::as_u64)
        .unwrap_or(0) as u32;

    Ok(LeetCodeStats {
        // Recomputed locally; upstream "All" totals are not trusted
        total: easy + medium + hard,
        easy,
        medium,
        hard,
        ranking,
        reputation,
        ranking_history: Vec::new(),
    })
}

fn difficulty_count(counts: &[Value], difficulty: &str) -> u32 {
    counts
        .iter()
        .find(|entry| entry.get("difficulty").and_then(Value::as_str) == Some(difficulty))
        .and_then(|entry| entry.get("count"))
        .and_then(Value::as_u64)
        .unwrap_or(0) as u32
}
