use std::cmp::Ordering;

use tracing::warn;

use crate::record::PackageRecord;
use crate::selection::selector::Match;
use crate::version::VersionComparator;

pub const PRIORITY_KEY: &str = "priority";

/// Priority declared in the record's metadata, 0 when absent.
///
/// Legacy string priorities (`"10"`) are read as integers. A value that
/// cannot be read as an integer is logged and treated as 0.
pub fn priority(record: &PackageRecord) -> i64 {
    let Some(value) = record.metadata.get(PRIORITY_KEY) else {
        return 0;
    };
    value.to_int().unwrap_or_else(|err| {
        warn!(package = %record.name, error = %err, "ignoring malformed priority, using 0");
        0
    })
}

/// Orders records by descending priority.
pub fn compare_priority(a: &PackageRecord, b: &PackageRecord) -> Ordering {
    priority(b).cmp(&priority(a))
}

/// `Greater` when the candidate's system is preferable to the current best's.
pub fn system_affinity(candidate: &str, best: &str, platform: &str) -> Ordering {
    if candidate == best {
        Ordering::Equal
    } else if candidate == platform {
        Ordering::Greater
    } else if best == platform {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// A match with its priority resolved once.
#[derive(Debug, Clone)]
pub struct Ranked<'a> {
    pub matched: Match<'a>,
    pub priority: i64,
}

impl<'a> Ranked<'a> {
    pub fn new(matched: Match<'a>) -> Self {
        let priority = priority(matched.record);
        Self { matched, priority }
    }
}

/// Decide between a candidate and the current best of the same name.
///
/// `Greater` means the candidate wins. Criteria in order: platform
/// affinity, priority (higher wins), version (newer wins).
pub fn tie_break<C: VersionComparator>(
    candidate: &Ranked<'_>,
    best: &Ranked<'_>,
    platform: &str,
    comparator: &C,
) -> Ordering {
    system_affinity(
        &candidate.matched.record.system,
        &best.matched.record.system,
        platform,
    )
    .then_with(|| candidate.priority.cmp(&best.priority))
    .then_with(|| {
        comparator.compare(&candidate.matched.name.version, &best.matched.name.version)
    })
}
