pub mod metadata;
pub mod record;

pub use crate::types::identifiers::RecordId;
pub use metadata::{Metadata, MetadataError, MetadataValue};
pub use record::PackageRecord;
