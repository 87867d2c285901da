pub mod identifiers;
pub mod resolution;

pub use identifiers::RecordId;
pub use resolution::{
    Resolution, ResolveError, ResolvedRecord, SelectorReport, VersionComparison, VersionDiff,
};
