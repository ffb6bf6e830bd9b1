use serde::{Deserialize, Deserializer};
use std::fmt;

/// Identifier of a backend record. The API sends integer primary keys, but
/// string ids are accepted too so the dashboard does not care which one it gets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

pub type RunId = RecordId;
pub type EventId = RecordId;

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Integer(i64),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(text) => RecordId(text),
            Repr::Integer(n) => RecordId(n.to_string()),
        })
    }
}
