//! Journal export adapter.
//!
//! Parses one line of `journalctl -o json` output into a [`JournalEntry`].
//! Journal address fields (`__CURSOR`, `__REALTIME_TIMESTAMP`, …) describe
//! where the entry sits in the journal rather than what it says, so they are
//! kept apart and left out of [`ToRecord::to_record`].

use chrono::{DateTime, Utc};
use jmut_core::{Record, ToRecord};
use serde_json::Value;

pub const CURSOR: &str = "__CURSOR";
pub const REALTIME_TIMESTAMP: &str = "__REALTIME_TIMESTAMP";

#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("invalid journal JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("journal entry must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// A single journal entry: data fields plus journal address fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JournalEntry {
    fields: Record,
    address: Record,
}

impl JournalEntry {
    pub fn from_json(line: &str) -> Result<Self, JournalError> {
        Self::from_value(serde_json::from_str(line)?)
    }

    pub fn from_value(value: Value) -> Result<Self, JournalError> {
        let map = match value {
            Value::Object(map) => map,
            Value::Null => return Err(JournalError::NotAnObject("null")),
            Value::Bool(_) => return Err(JournalError::NotAnObject("boolean")),
            Value::Number(_) => return Err(JournalError::NotAnObject("number")),
            Value::String(_) => return Err(JournalError::NotAnObject("string")),
            Value::Array(_) => return Err(JournalError::NotAnObject("list")),
        };

        let mut entry = Self::default();
        for (name, raw) in map {
            let Some(text) = field_text(&raw) else {
                continue;
            };
            if name.starts_with("__") {
                entry.address.insert(name, text);
            } else {
                entry.fields.insert(name, text);
            }
        }
        Ok(entry)
    }

    /// Data field by name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn cursor(&self) -> Option<&str> {
        self.address.get(CURSOR).map(String::as_str)
    }

    /// Wall-clock time the entry was received by the journal.
    pub fn realtime(&self) -> Option<DateTime<Utc>> {
        self.address
            .get(REALTIME_TIMESTAMP)?
            .parse::<i64>()
            .ok()
            .and_then(DateTime::from_timestamp_micros)
    }
}

impl ToRecord for JournalEntry {
    fn to_record(&self) -> Record {
        self.fields.clone()
    }
}

/// Text form of one exported field value.
///
/// Strings pass through; binary fields arrive as byte arrays and are decoded
/// lossily; a field repeated within one entry arrives as an array of values,
/// of which the last is kept.
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => match bytes(items) {
            Some(buf) => Some(String::from_utf8_lossy(&buf).into_owned()),
            None => items.iter().rev().find_map(field_text),
        },
        other => Some(other.to_string()),
    }
}

fn bytes(items: &[Value]) -> Option<Vec<u8>> {
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|v| v.as_u64().and_then(|n| u8::try_from(n).ok()))
        .collect()
}
