//! Type catalog: every metadata path the client is allowed to request.
//!
//! Each entry records which endpoint family serves it and, for paths that
//! embed caller-supplied values (a MAC address, a device index, a role name),
//! the positional template and how many arguments it takes. The table is
//! static and read-only.

mod table;

use std::fmt;

/// Which sub-path of the metadata endpoint serves a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Served under `meta-data/`.
    Metadata,
    /// Served under `dynamic/`.
    Dynamic,
}

impl Family {
    /// Sub-path appended to the base endpoint for this family.
    pub fn sub_path(self) -> &'static str {
        match self {
            Family::Metadata => "meta-data/",
            Family::Dynamic => "dynamic/",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Family::Metadata => "metadata",
            Family::Dynamic => "dynamic",
        })
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeEntry {
    /// Symbolic type name, e.g. `network/interfaces/macs/mac/vpc-id`.
    pub name: &'static str,
    pub family: Family,
    /// Number of positional arguments the template consumes (0 if untemplated).
    pub arity: usize,
    /// Path template with `%1`, `%2`, ... placeholders.
    pub template: Option<&'static str>,
}

/// Looks up a type by its symbolic name.
pub fn lookup(name: &str) -> Option<&'static TypeEntry> {
    table::ENTRIES.iter().find(|e| e.name == name)
}

/// True if `name` is a known metadata or dynamic type.
pub fn is_valid(name: &str) -> bool {
    lookup(name).is_some()
}

/// Family of a known type.
pub fn family_of(name: &str) -> Option<Family> {
    lookup(name).map(|e| e.family)
}

/// Required argument count; 0 for untemplated or unknown types.
pub fn required_args(name: &str) -> usize {
    lookup(name).map(|e| e.arity).unwrap_or(0)
}

/// All catalog entries, metadata family first.
pub fn entries() -> impl Iterator<Item = &'static TypeEntry> {
    table::ENTRIES.iter()
}
