//! Retry loop around a single metadata fetch.

use super::classify;
use super::policy::{RetryDecision, RetryPolicy};
use crate::error::MetadataError;
use crate::fetch;
use std::future::Future;

/// Fetches `type_name`, retrying retryable failures per `policy`.
///
/// Returns the last error once the policy says stop. A 404 is a successful
/// `Ok(None)` and is never retried.
pub async fn get_metadata_with_retry(
    policy: &RetryPolicy,
    type_name: &str,
    args: &[&str],
) -> Result<Option<String>, MetadataError> {
    run_with_retry(policy, move || fetch::get_metadata_for_instance(type_name, args)).await
}

/// Runs `f` until it succeeds or the retry policy says to stop.
/// On retryable failure, sleeps for the backoff duration then tries again.
pub(crate) async fn run_with_retry<T, F, Fut>(policy: &RetryPolicy, mut f: F) -> Result<T, MetadataError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, MetadataError>>,
{
    let mut attempt = 1u32;
    loop {
        match f().await {
            Ok(v) => return Ok(v),
            Err(e) => {
                let kind = classify::classify(&e);
                match policy.decide(attempt, kind) {
                    RetryDecision::NoRetry => return Err(e),
                    RetryDecision::RetryAfter(d) => {
                        tracing::debug!("attempt {} failed ({}); retrying in {:?}", attempt, e, d);
                        tokio::time::sleep(d).await;
                        attempt += 1;
                    }
                }
            }
        }
    }
}
