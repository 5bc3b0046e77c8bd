// HackerRank REST API client

use serde::Deserialize;
use tracing::warn;

use crate::utils::config;

pub const HACKERRANK_API: &str = "https://www.hackerrank.com/rest/hackers";

#[derive(Debug, Deserialize)]
struct ScoresResponse {
    #[serde(default)]
    models: Vec<ScoreModel>,
}

#[derive(Debug, Deserialize)]
struct ScoreModel {
    total_points: Option<f64>,
}

/// Fetch the total HackerRank points for a user.
/// Failures degrade to 0, same policy as the CodeChef adapter.
pub async fn fetch_points(client: &reqwest::Client, username: &str) -> u32 {
    match request_scores(client, username).await {
        Ok(scores) => total_points(&scores),
        Err(err) => {
            warn!("HackerRank scores fetch failed for {}: {}", username, err);
            0
        }
    }
}

async fn request_scores(
    client: &reqwest::Client,
    username: &str,
) -> Result<ScoresResponse, reqwest::Error> {
    client
        .get(format!("{}/{}/scores", HACKERRANK_API, username))
        .header("User-Agent", "Mozilla/5.0")
        .header("Accept", "application/json")
        .timeout(config::UPSTREAM_TIMEOUT)
        .send()
        .await?
        .json()
        .await
}

fn total_points(scores: &ScoresResponse) -> u32 {
    scores
        .models
        .first()
        .and_then(|model| model.total_points)
        .unwrap_or(0.0)
        .round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_from_first_model() {
        let scores: ScoresResponse = serde_json::from_str(
            r#"{ "models": [{ "total_points": 1523.5 }, { "total_points": 10.0 }] }"#,
        )
        .unwrap();
        assert_eq!(total_points(&scores), 1524);
    }

    #[test]
    fn test_empty_models_defaults_to_zero() {
        let scores: ScoresResponse = serde_json::from_str(r#"{ "models": [] }"#).unwrap();
        assert_eq!(total_points(&scores), 0);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let scores: ScoresResponse =
            serde_json::from_str(r#"{ "models": [{ "rank": 3 }] }"#).unwrap();
        assert_eq!(total_points(&scores), 0);

        let scores: ScoresResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(total_points(&scores), 0);
    }
}
