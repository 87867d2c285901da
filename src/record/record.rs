use serde::{Deserialize, Serialize};

use super::metadata::Metadata;

/// A package as seen by the selection engine.
///
/// Owned by the caller. The engine only borrows records for the duration
/// of a call and never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    /// Full name, base name and version joined by `-` (`hello-2.10`).
    pub name: String,
    /// Platform tag such as `x86_64-linux`. May be empty.
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl PackageRecord {
    pub fn new(name: impl Into<String>, system: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            system: system.into(),
            metadata: Metadata::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}
