use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid resolver configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Platform tag of the running host, `<arch>-<os>` (`x86_64-linux`,
/// `aarch64-darwin`).
pub fn current_platform() -> String {
    let os = match env::consts::OS {
        "macos" => "darwin",
        other => other,
    };
    format!("{}-{}", env::consts::ARCH, os)
}

// Serializable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Collapse same-named matches of a selector to a single record.
    pub newest_only: bool,
    /// Platform tag preferred by the newest-only reduction.
    pub platform: String,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self::for_current_platform()
    }
}

impl ResolveConfig {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            newest_only: false,
            platform: platform.into(),
        }
    }

    pub fn for_current_platform() -> Self {
        Self::new(current_platform())
    }

    pub fn with_newest_only(mut self, newest_only: bool) -> Self {
        self.newest_only = newest_only;
        self
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}
