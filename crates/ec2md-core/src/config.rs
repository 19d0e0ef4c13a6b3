use crate::catalog;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per fetch (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_secs: 0.25,
            max_delay_secs: 2,
        }
    }
}

/// Global configuration loaded from `~/.config/ec2md/config.toml`.
///
/// The endpoint and request deadlines are fixed and deliberately absent here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ec2mdConfig {
    /// Types fetched by `ec2md summary`. Must be untemplated catalog types.
    pub summary_types: Vec<String>,
    /// Optional retry policy for `--retry`; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for Ec2mdConfig {
    fn default() -> Self {
        Self {
            summary_types: ["ami-id", "hostname", "public-hostname", "public-ipv4"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            retry: None,
        }
    }
}

impl Ec2mdConfig {
    /// Rejects summary types that are unknown or need arguments.
    ///
    /// Only `summary` consumes these, so loading does not call this.
    pub fn validate(&self) -> Result<()> {
        for t in &self.summary_types {
            match catalog::lookup(t) {
                None => bail!("summary_types: unknown metadata type {:?}", t),
                Some(e) if e.arity > 0 => {
                    bail!("summary_types: {:?} needs {} argument(s)", t, e.arity)
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Retry settings, falling back to defaults when the section is absent.
    pub fn retry_or_default(&self) -> RetryConfig {
        self.retry.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ec2md")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<Ec2mdConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<Ec2mdConfig> {
    if !path.exists() {
        let default_cfg = Ec2mdConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: Ec2mdConfig = toml::from_str(&data)?;
    Ok(cfg)
}
