//! Logging setup for the `ec2md` binary.
//!
//! Events go to `$XDG_STATE_HOME/ec2md/ec2md.log` when that file can be
//! opened, otherwise to stderr. `RUST_LOG` overrides the default filter.

use anyhow::{anyhow, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,ec2md=debug,ec2md_core=debug";

/// Where log events are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to `ec2md.log` under the XDG state dir.
    StateFile,
    Stderr,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Path of the log file, creating its directory.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ec2md")?;
    Ok(xdg_dirs.place_state_file("ec2md.log")?)
}

/// Installs the global subscriber for `target`.
///
/// Fails if the log file cannot be opened or a subscriber is already set.
pub fn init(target: LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false);

    match target {
        LogTarget::StateFile => {
            let path = log_file_path()?;
            let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .with_writer(Arc::new(file))
                .try_init()
                .map_err(|e| anyhow!("tracing init: {}", e))?;
            tracing::info!("ec2md logging initialized at {}", path.display());
        }
        LogTarget::Stderr => builder
            .with_writer(io::stderr)
            .try_init()
            .map_err(|e| anyhow!("tracing init: {}", e))?,
    }
    Ok(())
}

/// Tries the state file, falls back to stderr. Returns the target in use.
pub fn init_with_fallback() -> LogTarget {
    match init(LogTarget::StateFile) {
        Ok(()) => LogTarget::StateFile,
        Err(err) => {
            let _ = init(LogTarget::Stderr);
            tracing::warn!("file logging unavailable, using stderr: {:#}", err);
            LogTarget::Stderr
        }
    }
}
