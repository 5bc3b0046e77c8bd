// codetrack CLI
// One-shot stats aggregation for a set of linked platform usernames

use std::env;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codetrack::{StatsService, UsernameSet};

/// Pick a username from `--flag value` args, falling back to an env var
fn username_arg(args: &[String], flag: &str, env_key: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
        .or_else(|| env::var(env_key).ok())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "codetrack=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().collect();
    let usernames = UsernameSet {
        leetcode: username_arg(&args, "--leetcode", "LEETCODE_USERNAME"),
        codechef: username_arg(&args, "--codechef", "CODECHEF_USERNAME"),
        hackerrank: username_arg(&args, "--hackerrank", "HACKERRANK_USERNAME"),
    };

    let http_client = reqwest::Client::builder()
        .user_agent("Mozilla/5.0")
        .build()
        .context("Failed to create HTTP client")?;

    let service = StatsService::new(http_client);

    info!("Fetching platform stats...");
    match service.get_stats(&usernames).await {
        Ok(stats) => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        }
        Err(err) => {
            error!("Aggregation failed (status {}): {}", err.status_code(), err);
            anyhow::bail!("{}", err)
        }
    }
}
