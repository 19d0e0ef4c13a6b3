//! Client for the EC2 instance metadata service.
//!
//! Maps a symbolic metadata type (e.g. `local-ipv4`,
//! `network/interfaces/macs/mac/vpc-id`) plus positional arguments to a URL
//! under `http://169.254.169.254/latest/`, fetches it, and detects whether the
//! process runs on EC2 at all.
//!
//! ```no_run
//! # async fn demo() -> Result<(), ec2md_core::MetadataError> {
//! if ec2md_core::is_ec2().await {
//!     let ip = ec2md_core::get_metadata_for_instance("public-ipv4", &[]).await?;
//!     println!("{}", ip.as_deref().unwrap_or("(not available)"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod logging;

pub mod catalog;
pub mod detect;
pub mod error;
pub mod fetch;
pub mod resolve;
pub mod retry;

pub use catalog::Family;
pub use detect::{is_ec2, Detector};
pub use error::MetadataError;
pub use fetch::{fetch_url, get_metadata_for_instance};
pub use retry::get_metadata_with_retry;

/// Absolute URL for a type and its arguments.
pub fn url_for_type(type_name: &str, args: &[&str]) -> Result<String, MetadataError> {
    resolve::resolve_url(type_name, args)
}

/// Path for a type with its arguments substituted into the template.
pub fn replace_values_for_type(type_name: &str, args: &[&str]) -> Result<String, MetadataError> {
    resolve::resolve_path(type_name, args)
}
