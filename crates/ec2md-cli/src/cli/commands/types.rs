//! `ec2md types` – list the metadata type catalog.

use anyhow::Result;
use ec2md_core::catalog::{self, Family};

pub fn run_types(family: Option<Family>) -> Result<()> {
    println!("{:<10} {:<5} {}", "FAMILY", "ARGS", "TYPE");
    for e in catalog::entries().filter(|e| family.map_or(true, |f| e.family == f)) {
        println!("{:<10} {:<5} {}", e.family, e.arity, e.name);
    }
    Ok(())
}
