// CodeChef profile scraper
// There is no stable public JSON API, so the rating is read off the
// profile page HTML. The extraction lives behind this module so it can
// be swapped out without touching the aggregator.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::utils::config;

pub const CODECHEF_PROFILE_URL: &str = "https://www.codechef.com/users";

static RATING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Rating\s*:\s*(\d+)").unwrap());

/// Fetch the current CodeChef rating for a user.
///
/// Scraping failures of any kind degrade to a rating of 0 so a flaky
/// profile page never blanks the rest of the dashboard.
pub async fn fetch_rating(client: &reqwest::Client, username: &str) -> u32 {
    match request_profile(client, username).await {
        Ok(html) => extract_rating(&html),
        Err(err) => {
            warn!("CodeChef profile fetch failed for {}: {}", username, err);
            0
        }
    }
}

async fn request_profile(
    client: &reqwest::Client,
    username: &str,
) -> Result<String, reqwest::Error> {
    let response = client
        .get(format!("{}/{}", CODECHEF_PROFILE_URL, username))
        .header("User-Agent", "Mozilla/5.0")
        .header("Accept", "text/html")
        .timeout(config::UPSTREAM_TIMEOUT)
        .send()
        .await?;

    response.text().await
}

fn extract_rating(html: &str) -> u32 {
    RATING_RE
        .captures(html)
        .and_then(|captures| captures.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
