//! CLI for the EC2 instance metadata client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use ec2md_core::config;
use ec2md_core::Family;

use commands::{retry_policy, run_get, run_is_ec2, run_path, run_summary, run_types, run_url};

/// Top-level CLI for the metadata client.
#[derive(Debug, Parser)]
#[command(name = "ec2md")]
#[command(about = "ec2md: query the EC2 instance metadata service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Endpoint family filter for `types`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FamilyArg {
    Metadata,
    Dynamic,
}

impl From<FamilyArg> for Family {
    fn from(f: FamilyArg) -> Self {
        match f {
            FamilyArg::Metadata => Family::Metadata,
            FamilyArg::Dynamic => Family::Dynamic,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch one metadata value.
    Get {
        /// Metadata type, e.g. `local-ipv4` or `network/interfaces/macs/mac/vpc-id`.
        type_name: String,
        /// Positional arguments for templated types (MAC address, device index, ...).
        args: Vec<String>,
        /// Retry timeouts, connection failures and 5xx using the configured policy.
        #[arg(long)]
        retry: bool,
    },

    /// Print the URL a type resolves to, without fetching it.
    Url {
        type_name: String,
        args: Vec<String>,
    },

    /// Print the path a type resolves to, without fetching it.
    Path {
        type_name: String,
        args: Vec<String>,
    },

    /// Print whether this host is an EC2 instance.
    IsEc2,

    /// List known metadata types.
    Types {
        /// Only list types of this endpoint family.
        #[arg(long, value_enum)]
        family: Option<FamilyArg>,
    },

    /// Fetch the configured summary values concurrently.
    Summary,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Get {
                type_name,
                args,
                retry,
            } => {
                let policy = retry_policy(retry, config::load_or_init)?;
                run_get(policy, &type_name, &args).await?
            }
            CliCommand::Url { type_name, args } => run_url(&type_name, &args)?,
            CliCommand::Path { type_name, args } => run_path(&type_name, &args)?,
            CliCommand::IsEc2 => run_is_ec2().await?,
            CliCommand::Types { family } => run_types(family.map(Family::from))?,
            CliCommand::Summary => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_summary(&cfg).await?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
