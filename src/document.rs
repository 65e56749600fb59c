//! Match document decoding.
//!
//! A match document is a JSON array of events. Each event is decoded on its
//! own so a failure can name the offending index. Required fields must be
//! present; the only tolerated gaps are a minion's `attackable` flag and a
//! player's `minions` list.

use std::io::Read;

use serde::Deserialize;
use serde_json::Value;

use crate::record::Event;

/// Errors that can occur while decoding a match document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document root must be an array of events, got {0}")]
    NotAnEventList(&'static str),

    #[error("malformed event at index {index}: {source}")]
    MalformedEvent {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// One recorded match, as an ordered list of events.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchDocument {
    events: Vec<Event>,
}

impl MatchDocument {
    pub fn new(events: Vec<Event>) -> Self {
        MatchDocument { events }
    }

    /// Events in recorded order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Returns the JSON type name of a value, for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Builds a match document from an already-decoded JSON value.
pub fn document_from_value(value: Value) -> Result<MatchDocument, DocumentError> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(DocumentError::NotAnEventList(json_kind(&other))),
    };

    let events = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            Event::deserialize(item).map_err(|source| DocumentError::MalformedEvent { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MatchDocument::new(events))
}

/// Parses a match document from JSON text.
pub fn parse_document(s: &str) -> Result<MatchDocument, DocumentError> {
    let value: Value = serde_json::from_str(s)?;
    document_from_value(value)
}

/// Reads and parses a match document from a byte stream.
pub fn read_document<R: Read>(reader: R) -> Result<MatchDocument, DocumentError> {
    let value: Value = serde_json::from_reader(reader)?;
    document_from_value(value)
}
