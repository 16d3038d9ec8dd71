use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message - one chat message as it appeared in a recorded request
///
/// `content` is kept as raw JSON because providers send either a string or a
/// list of typed content parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Content-addressed identifier (see `trace::catalog`)
    pub id: String,

    /// Chat role (`system`, `user`, `assistant`, `tool`, ...)
    pub role: String,

    /// Message body as sent to the provider
    pub content: Value,
}

impl Message {
    pub fn new(id: impl Into<String>, role: impl Into<String>, content: Value) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            content,
        }
    }

    /// Plain-text preview of the content
    ///
    /// String content is returned as-is; typed content parts contribute their
    /// `text` fields joined by newlines.
    pub fn text(&self) -> String {
        match &self.content {
            Value::String(s) => s.clone(),
            Value::Array(parts) => parts
                .iter()
                .filter_map(|part| part.get("text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("\n"),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}
