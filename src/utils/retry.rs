// Retry helper for flaky upstream calls

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::PlatformError;

/// Run `operation`, retrying transient failures (timeouts, connection
/// aborts) up to `max_retries` times with a fixed `delay` between attempts.
///
/// Non-transient failures propagate immediately. When retries run out the
/// last transient error is surfaced as a plain fetch failure.
pub async fn fetch_with_retry<T, F, Fut>(
    operation: F,
    max_retries: u32,
    delay: Duration,
) -> Result<T, PlatformError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, PlatformError>>,
{
    let mut retries_left = max_retries;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_transient() && retries_left > 0 => {
                warn!(
                    "Transient upstream error ({}), retrying... {} attempts left",
                    err, retries_left
                );
                tokio::time::sleep(delay).await;
                retries_left -= 1;
            }
            Err(err) if err.is_transient() => {
                return Err(PlatformError::Fetch(err.to_string()));
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn flaky(attempts: Arc<AtomicU32>, fail_first: u32) -> impl Fn() -> FlakyFut {
        move || {
            let attempts = attempts.clone();
            Box::pin(async move {
                let n = attempts.fetch_add(1, Ordering::SeqCst);
                if n < fail_first {
                    Err(PlatformError::Transient("connection timeout".to_string()))
                } else {
                    Ok(42)
                }
            })
        }
    }

    type FlakyFut =
        std::pin::Pin<Box<dyn Future<Output = Result<u32, PlatformError>> + Send>>;

    #[tokio::test]
    async fn test_success_needs_no_retry() {
        let attempts = Arc::new(AtomicU32::new(0));
        let result = fetch_with_retry(flaky(attempts.clone(), 0), 3, Duration::from_millis(1)).await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_transient_failures_with_fixed_delay() {
        let attempts = Arc::new(AtomicU32::new(0));
        let started = tokio::time::Instant::now();

        let result = fetch_with_retry(
            flaky(attempts.clone(), 2),
            3,
            Duration::from_millis(2000),
        )
        .await;

        assert_eq!(result.unwrap(), 42);
        // Two failures means exactly two retries, 2s apart each
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
        assert_eq!(started.elapsed(), Duration::from_millis(4000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausted_retries_surface_as_fetch_error() {
        let attempts = Arc::new(AtomicU32::new(0));

        let result = fetch_with_retry(
            flaky(attempts.clone(), u32::MAX),
            3,
            Duration::from_millis(2000),
        )
        .await;

        // Initial attempt plus three retries
        assert_eq!(attempts.load(Ordering::SeqCst), 4);
        match result {
            Err(PlatformError::Fetch(message)) => assert!(message.contains("timeout")),
            other => panic!("expected fetch error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_transient_failure_propagates_immediately() {
        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_inner = attempts.clone();

        let result: Result<u32, _> = fetch_with_retry(
            move || {
                let attempts = attempts_inner.clone();
                async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Err(PlatformError::NotFound("user not found".to_string()))
                }
            },
            3,
            Duration::from_millis(2000),
        )
        .await;

        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert!(matches!(result, Err(PlatformError::NotFound(_))));
    }
}
