//! Corpus construction from JSON.
//!
//! Accepted top-level shapes: an array of records, an object wrapping a
//! record list under a known key, or a bare object treated as a one-record
//! corpus. Anything else is an input error — the only terminal failure in
//! the taxonomy.

use std::fs;
use std::path::Path;

use promptscope_core::CorpusError;
use serde_json::Value;

use super::record::PromptRecord;

/// Object keys that may wrap the record list, in probe order.
const LIST_KEYS: [&str; 4] = ["prompts", "data", "items", "recipes"];

/// An in-memory corpus of prompt records.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<PromptRecord>,
}

impl Corpus {
    pub fn from_records(records: Vec<PromptRecord>) -> Self {
        Self { records }
    }

    /// Build a corpus from a parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self, CorpusError> {
        match value {
            Value::Array(items) => Ok(Self {
                records: items.iter().map(PromptRecord::from_value).collect(),
            }),
            Value::Object(map) => {
                for key in LIST_KEYS {
                    if let Some(Value::Array(items)) = map.get(key) {
                        return Ok(Self {
                            records: items.iter().map(PromptRecord::from_value).collect(),
                        });
                    }
                }
                // A bare object is a one-record corpus.
                Ok(Self {
                    records: vec![PromptRecord::from_value(value)],
                })
            }
            Value::Null => Err(CorpusError::UnsupportedShape { found: "null" }),
            Value::Bool(_) => Err(CorpusError::UnsupportedShape { found: "boolean" }),
            Value::Number(_) => Err(CorpusError::UnsupportedShape { found: "number" }),
            Value::String(_) => Err(CorpusError::UnsupportedShape { found: "string" }),
        }
    }

    /// Parse JSON text into a corpus.
    pub fn from_json_str(text: &str) -> Result<Self, CorpusError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Read and parse a corpus file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded corpus file");
        Self::from_json_str(&text)
    }

    pub fn records(&self) -> &[PromptRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
