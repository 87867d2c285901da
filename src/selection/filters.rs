use std::cmp::Ordering;

use crate::record::PackageRecord;
use crate::selection::selector::WILDCARD;

/// Keep records built for `system`; `*` keeps everything.
pub fn filter_by_system<'a>(records: &'a [PackageRecord], system: &str) -> Vec<&'a PackageRecord> {
    records
        .iter()
        .filter(|record| system == WILDCARD || record.system == system)
        .collect()
}

fn cmp_name_case_insensitive(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_uppercase())
        .cmp(b.bytes().map(|c| c.to_ascii_uppercase()))
}

/// Stable sort by full name, ignoring ASCII case.
pub fn sort_by_name(records: &mut [&PackageRecord]) {
    records.sort_by(|a, b| cmp_name_case_insensitive(&a.name, &b.name));
}
