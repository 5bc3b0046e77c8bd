// Statistics models for platform aggregation

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::PlatformError;

static USERNAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// External usernames linked to one user, at most one per platform.
/// Empty/whitespace values are treated as "not linked".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsernameSet {
    pub leetcode: Option<String>,
    pub codechef: Option<String>,
    pub hackerrank: Option<String>,
}

impl UsernameSet {
    pub fn leetcode(&self) -> Option<&str> {
        normalize(&self.leetcode)
    }

    pub fn codechef(&self) -> Option<&str> {
        normalize(&self.codechef)
    }

    pub fn hackerrank(&self) -> Option<&str> {
        normalize(&self.hackerrank)
    }

    /// At least one username must be present, and every present username
    /// must be plain `[A-Za-z0-9_-]+`.
    pub fn validate(&self) -> Result<(), PlatformError> {
        let entries = [
            ("leetcode", self.leetcode()),
            ("codechef", self.codechef()),
            ("hackerrank", self.hackerrank()),
        ];

        if entries.iter().all(|(_, name)| name.is_none()) {
            return Err(PlatformError::Validation(
                "no usernames provided".to_string(),
            ));
        }

        for (platform, name) in entries {
            if let Some(name) = name {
                if !USERNAME_RE.is_match(name) {
                    return Err(PlatformError::Validation(format!(
                        "invalid {} username: {}",
                        platform, name
                    )));
                }
            }
        }

        Ok(())
    }

    /// Cache key covering all three usernames
    pub fn cache_key(&self) -> String {
        format!(
            "lc:{}|cc:{}|hr:{}",
            self.leetcode().unwrap_or(""),
            self.codechef().unwrap_or(""),
            self.hackerrank().unwrap_or("")
        )
    }
}

fn normalize(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Normalized LeetCode profile stats.
/// `total` is always recomputed from the per-difficulty counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeStats {
    pub total: u32,
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
    pub ranking: u32,
    pub reputation: u32,
    pub ranking_history: Vec<u32>,
}

/// Per-platform fetch outcome attached to the aggregated response,
/// so partial data always reaches the caller with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PlatformStatus {
    Ok,
    Skipped,
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformStatuses {
    pub leetcode: PlatformStatus,
    pub codechef: PlatformStatus,
    pub hackerrank: PlatformStatus,
}

/// Unified stats record returned to the caller and cached.
/// Built fresh per aggregation, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedStats {
    pub leetcode: Option<LeetCodeStats>,
    pub codechef_rating: u32,
    pub codechef_ranking_history: Vec<u32>,
    pub hackerrank_points: u32,
    pub hackerrank_ranking_history: Vec<u32>,
    pub platforms: PlatformStatuses,
    pub fetched_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(lc: &str, cc: &str, hr: &str) -> UsernameSet {
        UsernameSet {
            leetcode: Some(lc.to_string()),
            codechef: Some(cc.to_string()),
            hackerrank: Some(hr.to_string()),
        }
    }

    #[test]
    fn test_all_empty_fails_validation() {
        let err = set("", "", "").validate().unwrap_err();
        assert_eq!(err.to_string(), "no usernames provided");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let usernames = set("  ", "", "");
        assert!(usernames.leetcode().is_none());
        assert!(usernames.validate().is_err());
    }

    #[test]
    fn test_single_username_is_enough() {
        let usernames = UsernameSet {
            leetcode: Some("tourist_2".to_string()),
            ..Default::default()
        };
        assert!(usernames.validate().is_ok());
        assert_eq!(usernames.leetcode(), Some("tourist_2"));
        assert!(usernames.codechef().is_none());
    }

    #[test]
    fn test_rejects_odd_characters() {
        let usernames = set("good-name", "bad name", "");
        let err = usernames.validate().unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("codechef"));
    }

    #[test]
    fn test_cache_key_distinguishes_platforms() {
        let a = UsernameSet {
            leetcode: Some("alice".to_string()),
            ..Default::default()
        };
        let b = UsernameSet {
            codechef: Some("alice".to_string()),
            ..Default::default()
        };
        assert_ne!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key(), a.clone().cache_key());
    }

    #[test]
    fn test_aggregated_stats_serializes_camel_case() {
        let stats = AggregatedStats {
            leetcode: None,
            codechef_rating: 1850,
            codechef_ranking_history: vec![3, 2, 1],
            hackerrank_points: 120,
            hackerrank_ranking_history: vec![],
            platforms: PlatformStatuses {
                leetcode: PlatformStatus::Skipped,
                codechef: PlatformStatus::Ok,
                hackerrank: PlatformStatus::Failed {
                    message: "boom".to_string(),
                },
            },
            fetched_at: Utc::now(),
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["codechefRating"], 1850);
        assert_eq!(json["hackerrankPoints"], 120);
        assert!(json["codechefRankingHistory"].is_array());
        assert_eq!(json["platforms"]["codechef"]["status"], "ok");
        assert_eq!(json["platforms"]["hackerrank"]["message"], "boom");
        assert!(json.get("fetchedAt").is_some());
    }
}
