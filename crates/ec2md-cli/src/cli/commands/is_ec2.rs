//! `ec2md is-ec2` – print whether this host is an EC2 instance.

use anyhow::Result;

pub async fn run_is_ec2() -> Result<()> {
    println!("{}", ec2md_core::is_ec2().await);
    Ok(())
}
