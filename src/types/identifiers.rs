use serde::{Deserialize, Serialize};

/// Identity of a candidate record within one resolution call: its
/// position in the candidate slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(usize);

impl RecordId {
    pub fn new(position: usize) -> Self {
        RecordId(position)
    }

    pub fn position(&self) -> usize {
        self.0
    }
}
