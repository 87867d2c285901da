use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Int(i64),
    String(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("value `{0}` is not an integer")]
    NotAnInteger(String),
    #[error("list value cannot be read as an integer")]
    UnexpectedList,
}

impl MetadataValue {
    /// Integer view of the value.
    ///
    /// Strings are accepted for fields that predate integer metadata
    /// (`"10"` reads as `10`).
    pub fn to_int(&self) -> Result<i64, MetadataError> {
        match self {
            MetadataValue::Int(n) => Ok(*n),
            MetadataValue::String(s) => s
                .trim()
                .parse()
                .map_err(|_| MetadataError::NotAnInteger(s.clone())),
            MetadataValue::List(_) => Err(MetadataError::UnexpectedList),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    inner: BTreeMap<String, MetadataValue>,
}

impl Metadata {
    pub fn new() -> Self {
        Metadata {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), MetadataValue::String(value.into()));
    }

    pub fn insert_int(&mut self, key: impl Into<String>, value: i64) {
        self.inner.insert(key.into(), MetadataValue::Int(value));
    }

    pub fn insert_list<I, S>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = values.into_iter().map(Into::into).collect();
        self.inner.insert(key.into(), MetadataValue::List(list));
    }

    // Entries in `other` win on conflicting keys
    pub fn merge(&mut self, other: Metadata) {
        for (k, v) in other.inner {
            self.inner.insert(k, v);
        }
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.inner.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetadataValue)> {
        self.inner.iter()
    }
}
