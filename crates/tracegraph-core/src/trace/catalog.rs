use super::record::TraceRecord;
use crate::model::Message;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Content-addressed store of request messages
///
/// Two messages with the same role and content get the same id no matter
/// which request they came from, which is what lets the diff engine anchor
/// on them.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    messages: HashMap<String, Message>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hex SHA-256 of the canonical JSON form of `{role, content}`
    ///
    /// Object keys serialize in sorted order, so key order in the recorded
    /// request does not affect the id.
    pub fn message_id(role: &str, content: &Value) -> String {
        let canonical = json!({ "role": role, "content": content });
        let mut hasher = Sha256::new();
        hasher.update(canonical.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Intern one raw request message and return its id
    ///
    /// A missing role reads as `unknown`; missing content as null.
    pub fn intern(&mut self, raw: &Value) -> String {
        let role = raw.get("role").and_then(Value::as_str).unwrap_or("unknown");
        let content = raw.get("content").cloned().unwrap_or(Value::Null);
        let id = Self::message_id(role, &content);
        self.messages
            .entry(id.clone())
            .or_insert_with(|| Message::new(id.clone(), role, content));
        id
    }

    /// Intern every message of a record's request, in request order
    pub fn ingest(&mut self, record: &TraceRecord) -> Vec<String> {
        record
            .request_messages()
            .iter()
            .map(|raw| self.intern(raw))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Message> {
        self.messages.get(id)
    }

    /// Owned lookup, for use as the diff engine's resolver
    pub fn resolve(&self, id: &str) -> Option<Message> {
        self.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.messages.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
