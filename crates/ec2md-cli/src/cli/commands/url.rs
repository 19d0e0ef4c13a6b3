//! `ec2md url` / `ec2md path` – show what a type resolves to, without fetching.

use anyhow::Result;

use super::as_strs;

pub fn run_url(type_name: &str, args: &[String]) -> Result<()> {
    println!("{}", ec2md_core::url_for_type(type_name, &as_strs(args))?);
    Ok(())
}

pub fn run_path(type_name: &str, args: &[String]) -> Result<()> {
    println!("{}", ec2md_core::replace_values_for_type(type_name, &as_strs(args))?);
    Ok(())
}
