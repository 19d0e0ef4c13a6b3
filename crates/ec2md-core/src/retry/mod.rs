//! Caller-side retry and backoff for metadata fetches.
//!
//! The fetcher makes exactly one attempt per call. Callers that want retries
//! (the CLI's `--retry`) go through this module: errors are classified
//! (timeouts, throttling, connection failures) and retried with capped
//! exponential backoff. Validation failures are never retried.

mod classify;
mod policy;
mod run;

pub use classify::{classify, classify_http_status};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::get_metadata_with_retry;
