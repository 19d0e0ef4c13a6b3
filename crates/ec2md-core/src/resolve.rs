//! Type + arguments → metadata path and URL.
//!
//! Arguments are substituted verbatim. Callers are responsible for passing
//! path-safe values (MAC addresses, indices, role names).

use crate::catalog::{self, TypeEntry};
use crate::error::MetadataError;

/// Fixed base endpoint of the instance metadata service.
pub const BASE_URL: &str = "http://169.254.169.254/latest/";

/// Resolves a type and its arguments to a path below the family sub-path.
///
/// # Examples
///
/// - `resolve_path("ami-id", &[])` → `"ami-id"`
/// - `resolve_path("block-device-mapping/ebsN", &["1"])` → `"block-device-mapping/ebs1"`
pub fn resolve_path(type_name: &str, args: &[&str]) -> Result<String, MetadataError> {
    let entry = catalog::lookup(type_name)
        .ok_or_else(|| MetadataError::InvalidType(type_name.to_string()))?;
    substitute(entry, args)
}

/// Resolves a type and its arguments to the absolute request URL.
pub fn resolve_url(type_name: &str, args: &[&str]) -> Result<String, MetadataError> {
    let entry = catalog::lookup(type_name)
        .ok_or_else(|| MetadataError::InvalidType(type_name.to_string()))?;
    let path = substitute(entry, args)?;
    Ok(format!("{}{}{}", BASE_URL, entry.family.sub_path(), path))
}

fn substitute(entry: &TypeEntry, args: &[&str]) -> Result<String, MetadataError> {
    if args.len() != entry.arity {
        return Err(MetadataError::ArgumentCountMismatch {
            type_name: entry.name.to_string(),
            expected: entry.arity,
            actual: args.len(),
        });
    }
    let Some(template) = entry.template else {
        return Ok(entry.name.to_string());
    };
    let mut path = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        path = path.replacen(&format!("%{}", i + 1), arg, 1);
    }
    Ok(path)
}
