//! `ec2md summary` – fetch the configured set of values concurrently.

use anyhow::{bail, Context, Result};
use ec2md_core::config::Ec2mdConfig;
use ec2md_core::MetadataError;
use std::future::Future;

use super::get::NOT_AVAILABLE;

pub type SummaryValue = (String, Result<Option<String>, MetadataError>);

/// Prints every value that could be fetched, then fails if any could not.
pub async fn run_summary(cfg: &Ec2mdConfig) -> Result<()> {
    cfg.validate()?;

    let values = fetch_all(&cfg.summary_types, |t| async move {
        ec2md_core::get_metadata_for_instance(&t, &[]).await
    })
    .await?;

    let mut failed = 0usize;
    for (type_name, value) in &values {
        match value {
            Ok(v) => println!("{}: {}", type_name, v.as_deref().unwrap_or(NOT_AVAILABLE)),
            Err(e) => {
                eprintln!("{}: error: {}", type_name, e);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        bail!("{} of {} summary values could not be fetched", failed, values.len());
    }
    Ok(())
}

/// Spawns one task per type and waits for all of them, in input order.
///
/// A failed fetch does not stop the others from being awaited.
pub async fn fetch_all<F, Fut>(types: &[String], fetch: F) -> Result<Vec<SummaryValue>>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Option<String>, MetadataError>> + Send + 'static,
{
    let handles: Vec<_> = types
        .iter()
        .map(|t| {
            let fut = fetch(t.clone());
            let t = t.clone();
            tokio::spawn(async move { (t, fut.await) })
        })
        .collect();

    let mut values = Vec::with_capacity(handles.len());
    for h in handles {
        values.push(h.await.context("summary task join")?);
    }
    Ok(values)
}
