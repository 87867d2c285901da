use std::cmp::Ordering;

use crate::record::PackageRecord;
use crate::types::resolution::{VersionComparison, VersionDiff};
use crate::version::{NameParser, VersionComparator};

fn larger<C: VersionComparator>(current: Option<String>, seen: String, comparator: &C) -> Option<String> {
    match current {
        Some(current) if comparator.compare(&current, &seen) != Ordering::Less => Some(current),
        _ => Some(seen),
    }
}

fn step<C: VersionComparator>(
    acc: VersionComparison,
    own: &str,
    seen: String,
    comparator: &C,
) -> VersionComparison {
    let diff = comparator.compare(own, &seen);

    match (acc.diff, diff) {
        (VersionDiff::Greater, Ordering::Less) => VersionComparison {
            diff: VersionDiff::Greater,
            version: larger(acc.version, seen, comparator),
        },
        (_, Ordering::Less) => VersionComparison {
            diff: VersionDiff::Greater,
            version: Some(seen),
        },
        (VersionDiff::Greater, _) | (VersionDiff::Equal, _) => acc,
        (_, Ordering::Equal) => VersionComparison {
            diff: VersionDiff::Equal,
            version: Some(seen),
        },
        (VersionDiff::Less, Ordering::Greater) => VersionComparison {
            diff: VersionDiff::Less,
            version: larger(acc.version, seen, comparator),
        },
        (VersionDiff::Unavailable, Ordering::Greater) => VersionComparison {
            diff: VersionDiff::Less,
            version: Some(seen),
        },
    }
}

/// Compare a record's version against every same-named record in `reference`.
///
/// A newer reference version dominates an equal one, which dominates an
/// older one. The reported version is the extreme of the winning bucket:
/// the greatest newer version, or the greatest older version.
pub fn classify<P, C>(
    record: &PackageRecord,
    reference: &[PackageRecord],
    parser: &P,
    comparator: &C,
) -> VersionComparison
where
    P: NameParser,
    C: VersionComparator,
{
    let name = parser.parse(&record.name);

    reference
        .iter()
        .map(|other| parser.parse(&other.name))
        .filter(|other| other.base == name.base)
        .fold(VersionComparison::unavailable(), |acc, other| {
            step(acc, &name.version, other.version, comparator)
        })
}
