//! One input record, with its text extracted.

use serde_json::Value;

/// Text-bearing fields, in priority order. The first non-empty hit wins;
/// later fields are NOT merged in even when populated.
pub const TEXT_FIELDS: [&str; 7] = [
    "prompt",
    "text",
    "content",
    "message",
    "instruction",
    "query",
    "body",
];

const ID_FIELDS: [&str; 2] = ["id", "prompt_id"];

/// Fallback id for records without one.
pub const UNKNOWN_ID: &str = "unknown";

/// Fallback group key for records without a workspace name.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// One prompt record, immutable once extracted.
#[derive(Debug, Clone)]
pub struct PromptRecord {
    pub id: String,
    pub group_key: String,
    pub text: String,
}

impl PromptRecord {
    /// Extract a record from an arbitrary JSON value. Never fails: a record
    /// with no recognized text field falls back to the stringified value so
    /// analysis can proceed on malformed exports.
    pub fn from_value(value: &Value) -> Self {
        let id = ID_FIELDS
            .iter()
            .find_map(|field| scalar_field(value, field))
            .unwrap_or_else(|| UNKNOWN_ID.to_string());

        let group_key = scalar_field(value, "workspace_name")
            .unwrap_or_else(|| UNKNOWN_GROUP.to_string());

        let text = match extract_text(value) {
            Some(text) => text,
            None => {
                tracing::warn!(id = %id, "no text field found; analyzing stringified record");
                value.to_string()
            }
        };

        Self { id, group_key, text }
    }

    /// Whether this record counts toward percentage denominators.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// `None` means no recognized text field exists at all (triggering the
/// stringified-record fallback). A present-but-empty field yields
/// `Some("")` instead: the record is well-formed, it just has no text, and
/// it must stay out of percentage denominators.
fn extract_text(value: &Value) -> Option<String> {
    let object = value.as_object()?;
    let mut field_present = false;
    for field in TEXT_FIELDS {
        match object.get(field) {
            Some(Value::String(s)) => {
                field_present = true;
                if !s.is_empty() {
                    return Some(s.clone());
                }
            }
            Some(Value::Null) => field_present = true,
            Some(other) => return Some(other.to_string()),
            None => {}
        }
    }
    field_present.then(String::new)
}

fn scalar_field(value: &Value, field: &str) -> Option<String> {
    match value.get(field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prompt_field_wins_over_content() {
        let record = PromptRecord::from_value(&json!({
            "prompt": "from prompt",
            "content": "from content",
        }));
        assert_eq!(record.text, "from prompt");
    }

    #[test]
    fn priority_order_falls_through_empty_fields() {
        let record = PromptRecord::from_value(&json!({
            "prompt": "",
            "text": "",
            "content": "from content",
        }));
        assert_eq!(record.text, "from content");
    }

    #[test]
    fn missing_text_fields_fall_back_to_stringified_record() {
        let record = PromptRecord::from_value(&json!({"name": "no text here"}));
        assert!(record.text.contains("no text here"));
        assert_eq!(record.id, UNKNOWN_ID);
    }

    #[test]
    fn id_falls_back_to_prompt_id_then_unknown() {
        let by_prompt_id = PromptRecord::from_value(&json!({"prompt_id": 42, "prompt": "x"}));
        assert_eq!(by_prompt_id.id, "42");

        let by_id = PromptRecord::from_value(&json!({"id": "a", "prompt_id": "b", "prompt": "x"}));
        assert_eq!(by_id.id, "a");
    }

    #[test]
    fn group_key_defaults_to_unknown() {
        let record = PromptRecord::from_value(&json!({"prompt": "x"}));
        assert_eq!(record.group_key, UNKNOWN_GROUP);

        let grouped =
            PromptRecord::from_value(&json!({"prompt": "x", "workspace_name": "Sales"}));
        assert_eq!(grouped.group_key, "Sales");
    }

    #[test]
    fn whitespace_only_text_does_not_count() {
        let record = PromptRecord::from_value(&json!({"prompt": "   \n  "}));
        assert!(!record.has_text());
    }

    #[test]
    fn present_but_empty_field_means_empty_text_not_fallback() {
        let record = PromptRecord::from_value(&json!({"prompt": "", "workspace_name": "W"}));
        assert_eq!(record.text, "");
        assert!(!record.has_text());
    }

    #[test]
    fn non_string_text_field_is_stringified() {
        let record = PromptRecord::from_value(&json!({"prompt": {"nested": "value"}}));
        assert!(record.text.contains("nested"));
    }
}
