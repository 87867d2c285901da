pub mod compare;
pub mod names;

use std::cmp::Ordering;

pub use compare::compare_versions;
pub use names::{parse_name, PackageName};

/// Splits a full package name into its base name and version.
pub trait NameParser {
    fn parse(&self, full_name: &str) -> PackageName;
}

/// Total order over version strings.
pub trait VersionComparator {
    fn compare(&self, v1: &str, v2: &str) -> Ordering;
}

/// Default naming rules: `name-version` with numeric-aware, dot/dash
/// segmented version ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct NixVersioning;

impl NameParser for NixVersioning {
    fn parse(&self, full_name: &str) -> PackageName {
        parse_name(full_name)
    }
}

impl VersionComparator for NixVersioning {
    fn compare(&self, v1: &str, v2: &str) -> Ordering {
        compare_versions(v1, v2)
    }
}
