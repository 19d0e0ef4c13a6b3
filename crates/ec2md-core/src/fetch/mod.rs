//! Metadata GET.
//!
//! Uses the curl crate (libcurl) for a single GET with a fixed deadline.
//! The transfer runs on tokio's blocking pool; the `Easy` handle is dropped
//! inside the blocking task, so the socket is closed on every exit path,
//! including the timeout abort.

mod classify;

use crate::catalog;
use crate::error::MetadataError;
use crate::resolve;
use std::time::Duration;

/// Deadline for a metadata GET, measured from request start.
pub const FETCH_TIMEOUT: Duration = Duration::from_millis(2500);

/// Fetches a metadata value by symbolic type.
///
/// Returns `Ok(None)` when the service answers 404 for a valid type.
/// Unknown types and wrong argument counts fail without touching the network.
/// Makes exactly one attempt; see [`crate::retry`] for a caller-side policy.
pub async fn get_metadata_for_instance(
    type_name: &str,
    args: &[&str],
) -> Result<Option<String>, MetadataError> {
    if !catalog::is_valid(type_name) {
        return Err(MetadataError::InvalidType(type_name.to_string()));
    }
    let url = resolve::resolve_url(type_name, args)?;
    fetch_url(&url).await
}

/// Fetches an already-resolved URL with the standard deadline.
pub async fn fetch_url(url: &str) -> Result<Option<String>, MetadataError> {
    let url = url.to_string();
    tokio::task::spawn_blocking(move || get_blocking(&url, FETCH_TIMEOUT)).await?
}

/// Performs the GET in the current thread.
fn get_blocking(url: &str, timeout: Duration) -> Result<Option<String>, MetadataError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    // Link-local endpoint; never route through an HTTP proxy.
    easy.noproxy("*")?;
    easy.timeout(timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        if let Err(e) = transfer.perform() {
            tracing::debug!("GET {} failed: {}", url, e);
            return Err(e.into());
        }
    }

    let code = easy.response_code()?;
    tracing::debug!("GET {} returned HTTP {}", url, code);
    let body = String::from_utf8_lossy(&body).into_owned();
    let result = classify::classify_response(code, body);
    if let Err(MetadataError::HttpStatus { status, .. }) = &result {
        tracing::warn!("metadata service returned HTTP {} for {}", status, url);
    }
    result
}
