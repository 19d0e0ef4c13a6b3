//! `ec2md get <type> [args...]` – fetch one metadata value.

use anyhow::{Context, Result};
use ec2md_core::config::Ec2mdConfig;
use ec2md_core::retry::RetryPolicy;

use super::as_strs;

/// Printed when the service has no value for a valid type (HTTP 404).
pub(crate) const NOT_AVAILABLE: &str = "(not available)";

/// Retry policy for `get`. The config is only loaded when `--retry` asks for it.
pub fn retry_policy<F>(retry: bool, load_config: F) -> Result<Option<RetryPolicy>>
where
    F: FnOnce() -> Result<Ec2mdConfig>,
{
    if !retry {
        return Ok(None);
    }
    let cfg = load_config().context("loading config for --retry")?;
    Ok(Some(RetryPolicy::from(&cfg.retry_or_default())))
}

pub async fn run_get(policy: Option<RetryPolicy>, type_name: &str, args: &[String]) -> Result<()> {
    let args = as_strs(args);
    let value = match policy {
        Some(policy) => {
            tracing::debug!("fetching {} with {:?}", type_name, policy);
            ec2md_core::get_metadata_with_retry(&policy, type_name, &args).await
        }
        None => ec2md_core::get_metadata_for_instance(type_name, &args).await,
    }
    .with_context(|| format!("fetching {}", type_name))?;

    println!("{}", value.as_deref().unwrap_or(NOT_AVAILABLE));
    Ok(())
}
