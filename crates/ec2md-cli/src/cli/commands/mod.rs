//! CLI command handlers. Each command is in its own file.

mod get;
mod is_ec2;
mod summary;
mod types;
mod url;

pub use get::{retry_policy, run_get};
pub use is_ec2::run_is_ec2;
pub use summary::{fetch_all, run_summary};
pub use types::run_types;
pub use url::{run_path, run_url};

/// clap hands positional arguments over as owned strings.
fn as_strs(args: &[String]) -> Vec<&str> {
    args.iter().map(String::as_str).collect()
}
