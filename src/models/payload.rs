//! String-or-native embedded payloads.
//!
//! History rows embed vitals/medications/labResults/documents either as
//! native JSON or as a JSON-encoded string (older backend rows store the
//! serialized form). [`Payload`] resolves that exactly once at
//! deserialization, so downstream code never re-parses at render time and a
//! malformed payload costs only its own sub-record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Outcome of the one-time boundary parse of an embedded field.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    /// Field missing, JSON null, or an empty / "null" string.
    Absent,
    Parsed(T),
    /// Could not be decoded; the reason is kept for the skip log.
    Invalid(String),
}

impl<T> Payload<T> {
    pub fn as_parsed(&self) -> Option<&T> {
        match self {
            Payload::Parsed(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Payload::Absent)
    }

    pub fn invalid_reason(&self) -> Option<&str> {
        match self {
            Payload::Invalid(reason) => Some(reason),
            _ => None,
        }
    }
}

// Manual impl: the derive would demand T: Default for a variant that holds
// nothing.
impl<T> Default for Payload<T> {
    fn default() -> Self {
        Payload::Absent
    }
}

impl<'de, T> Deserialize<'de> for Payload<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(match raw {
            None | Some(Value::Null) => Payload::Absent,
            Some(Value::String(text)) => from_text(&text),
            Some(value) => match serde_json::from_value::<T>(value) {
                Ok(parsed) => Payload::Parsed(parsed),
                Err(e) => Payload::Invalid(e.to_string()),
            },
        })
    }
}

fn from_text<T: DeserializeOwned>(text: &str) -> Payload<T> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Payload::Absent;
    }
    match serde_json::from_str::<T>(trimmed) {
        Ok(parsed) => Payload::Parsed(parsed),
        Err(e) => Payload::Invalid(e.to_string()),
    }
}
