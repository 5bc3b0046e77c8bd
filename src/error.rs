// Error taxonomy for the aggregation core

use thiserror::Error;

/// Failures surfaced by the aggregation core.
///
/// Each variant maps to an HTTP-style status at the API boundary via
/// [`PlatformError::status_code`].
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Bad or missing caller input
    #[error("{0}")]
    Validation(String),

    /// Upstream does not know the user
    #[error("{0}")]
    NotFound(String),

    /// Upstream rate limit hit
    #[error("too many requests to {0}, please try again later")]
    TooManyRequests(String),

    /// Upstream reported a logical error (e.g. a GraphQL errors array)
    #[error("{0}")]
    Upstream(String),

    /// Response arrived but not in the expected shape
    #[error("{0}")]
    MalformedResponse(String),

    /// Timeout or connection abort, eligible for retry
    #[error("{0}")]
    Transient(String),

    /// Any other fetch failure
    #[error("{0}")]
    Fetch(String),
}

impl PlatformError {
    /// Whether a retry might help. A "timeout" substring in a generic
    /// fetch failure counts even when transport classification missed it.
    pub fn is_transient(&self) -> bool {
        match self {
            PlatformError::Transient(_) => true,
            PlatformError::Fetch(message) => message.contains("timeout"),
            _ => false,
        }
    }

    /// HTTP status the API boundary should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            PlatformError::Validation(_) => 400,
            PlatformError::TooManyRequests(_) => 429,
            _ => 500,
        }
    }

    /// Classify a transport error from reqwest
    pub fn from_reqwest(platform: &str, err: reqwest::Error) -> Self {
        let message = format!("{} request failed: {}", platform, err);
        if err.is_timeout() || err.is_connect() {
            PlatformError::Transient(message)
        } else {
            PlatformError::Fetch(message)
        }
    }
}
