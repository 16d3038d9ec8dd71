//! Recorded LLM requests and the message catalog built from them.
//!
//! The recording proxy appends one JSON object per request to a JSONL file.
//! [`record::parse_trace_jsonl`] reads that file back, and
//! [`catalog::MessageCatalog`] assigns every request message a
//! content-addressed id so consecutive requests can be diffed by id.

pub mod catalog;
pub mod record;

pub use catalog::MessageCatalog;
pub use record::{parse_trace_jsonl, read_trace_file, TraceRecord};
