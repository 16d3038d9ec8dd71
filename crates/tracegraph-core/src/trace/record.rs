use crate::errors::{Result, TraceGraphError};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

/// One recorded request/response exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    pub id: String,

    /// When the request was received (RFC 3339 string or unix seconds)
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,

    /// Request body as sent to the provider
    pub request: Value,

    /// Response body; None when the request failed
    #[serde(default)]
    pub response: Option<Value>,

    #[serde(default)]
    pub duration_ms: u64,

    /// Transport error message, if the request failed
    #[serde(default)]
    pub error: Option<String>,
}

impl TraceRecord {
    /// Raw `messages` array of the request (empty when absent)
    pub fn request_messages(&self) -> &[Value] {
        self.request
            .get("messages")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn model(&self) -> Option<&str> {
        self.request.get("model").and_then(Value::as_str)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Text(String),
        Seconds(f64),
    }

    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Text(text) => DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| D::Error::custom(format!("invalid timestamp '{}': {}", text, e))),
        RawTimestamp::Seconds(secs) => {
            let whole = secs.floor();
            let nanos = ((secs - whole) * 1e9).round() as u32;
            Utc.timestamp_opt(whole as i64, nanos.min(999_999_999))
                .single()
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {}", secs)))
        }
    }
}

/// Parse a JSONL trace file body
///
/// Blank lines are skipped.
///
/// # Errors
/// * `TraceRecordParse` - a non-blank line is not a valid record; `line` is
///   1-based
pub fn parse_trace_jsonl(content: &str) -> Result<Vec<TraceRecord>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line.trim()).map_err(|e| TraceGraphError::TraceRecordParse {
                line: idx + 1,
                message: e.to_string(),
            })
        })
        .collect()
}

/// Read and parse a JSONL trace file; a missing file reads as empty
///
/// # Errors
/// * `Io` - the file exists but cannot be read
/// * `TraceRecordParse` - see [`parse_trace_jsonl`]
pub fn read_trace_file(path: &Path) -> Result<Vec<TraceRecord>> {
    match fs::read_to_string(path) {
        Ok(content) => parse_trace_jsonl(&content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}
