use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::PackageRecord;
use crate::types::identifiers::RecordId;

/// A record chosen by a resolution, with its identity in the candidate slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRecord<'a> {
    pub id: RecordId,
    pub record: &'a PackageRecord,
}

/// Hit count of one selector over the whole candidate collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorReport {
    pub selector: String,
    pub hits: usize,
}

/// The outcome of a successful resolution.
#[derive(Debug, Clone)]
pub struct Resolution<'a> {
    /// Deduplicated records in selector order, then candidate order.
    pub records: Vec<ResolvedRecord<'a>>,
    /// One entry per selector, in input order.
    pub selectors: Vec<SelectorReport>,
    /// Base names whose newest-only reduction ended in a full tie.
    pub ambiguous: Vec<String>,
}

impl<'a> Resolution<'a> {
    pub fn into_records(self) -> Vec<&'a PackageRecord> {
        self.records.into_iter().map(|r| r.record).collect()
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.records.iter().map(|r| r.id).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("selector `{selector}` matches no packages")]
    SelectorUnmatched { selector: String },
}

/// Relative freshness of a record against a reference collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionDiff {
    /// Only older versions exist in the reference collection.
    Less,
    /// The newest reference version equals the record's.
    Equal,
    /// At least one newer version exists.
    Greater,
    /// No record of the same name exists.
    Unavailable,
}

impl VersionDiff {
    /// One-character marker used in query listings.
    pub fn marker(&self) -> char {
        match self {
            VersionDiff::Less => '>',
            VersionDiff::Equal => '=',
            VersionDiff::Greater => '<',
            VersionDiff::Unavailable => '-',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionComparison {
    pub diff: VersionDiff,
    /// The compared version that determined `diff`; `None` when unavailable.
    pub version: Option<String>,
}

impl VersionComparison {
    pub const PLACEHOLDER: &'static str = "?";

    pub fn unavailable() -> Self {
        Self {
            diff: VersionDiff::Unavailable,
            version: None,
        }
    }

    pub fn version_or_placeholder(&self) -> &str {
        self.version.as_deref().unwrap_or(Self::PLACEHOLDER)
    }
}

impl fmt::Display for VersionComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.diff.marker(), self.version_or_placeholder())
    }
}
