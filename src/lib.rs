//! Deterministic package selector resolution and version comparison.
//!
//! `pkgsel-core` decides which package records satisfy a list of
//! name/version selectors, optionally collapsing same-named matches to a
//! single winner (platform affinity, then priority, then version), and
//! reports how a record's version compares to a reference collection.
//! It is a pure function over caller-supplied records: nothing is
//! discovered, fetched or persisted here.

pub mod record;
pub mod selection;
pub mod types;
pub mod version;

pub use record::{Metadata, MetadataValue, PackageRecord};
pub use selection::{ResolveConfig, Resolver};
pub use types::{Resolution, ResolveError, VersionComparison, VersionDiff};
pub use version::{NameParser, NixVersioning, VersionComparator};

/// Resolve `selectors` against `candidates` with the default naming rules.
///
/// An empty selector list selects everything.
pub fn resolve_selectors<'a, S: AsRef<str>>(
    selectors: &[S],
    candidates: &'a [PackageRecord],
    newest_only: bool,
    platform: &str,
) -> Result<Vec<&'a PackageRecord>, ResolveError> {
    let config = ResolveConfig::new(platform).with_newest_only(newest_only);
    Resolver::new(NixVersioning, NixVersioning, config)
        .resolve(selectors, candidates)
        .map(Resolution::into_records)
}

/// Classify `record` against `reference` with the default naming rules.
pub fn classify_version(record: &PackageRecord, reference: &[PackageRecord]) -> VersionComparison {
    selection::diff::classify(record, reference, &NixVersioning, &NixVersioning)
}
