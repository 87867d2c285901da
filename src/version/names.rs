use serde::{Deserialize, Serialize};

/// A full package name split into base name and version.
///
/// `version` is empty when the full name carries none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageName {
    pub base: String,
    pub version: String,
}

impl PackageName {
    pub fn new(base: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            version: version.into(),
        }
    }

    pub fn has_version(&self) -> bool {
        !self.version.is_empty()
    }
}

/// Split at the first `-` that is followed by something other than an
/// ASCII letter.
///
/// `hello-2.10` -> (`hello`, `2.10`), `xorg-server-1.20` -> (`xorg-server`, `1.20`),
/// `foo-bar` -> (`foo-bar`, ``).
pub fn parse_name(full_name: &str) -> PackageName {
    let bytes = full_name.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'-' {
            if let Some(&next) = bytes.get(i + 1) {
                if !next.is_ascii_alphabetic() {
                    return PackageName::new(&full_name[..i], &full_name[i + 1..]);
                }
            }
        }
    }
    PackageName::new(full_name, "")
}
