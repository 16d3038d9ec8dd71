//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical between the emitting macros
//! and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Layout sizes
pub const FIELD_NODE_COUNT: &str = "node_count";
pub const FIELD_COLUMN_COUNT: &str = "column_count";
pub const FIELD_CURVE_COUNT: &str = "curve_count";

// Diff tallies
pub const FIELD_UNCHANGED: &str = "unchanged";
pub const FIELD_ADDED: &str = "added";
pub const FIELD_DELETED: &str = "deleted";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical operation names
pub const OP_LAYOUT_FOREST: &str = "layout_forest";
pub const OP_DIFF_MESSAGES: &str = "diff_messages";
pub const OP_DIFF_TRACE_RECORD: &str = "diff_trace_record";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_op_names_are_distinct() {
        assert_ne!(OP_LAYOUT_FOREST, OP_DIFF_MESSAGES);
        assert_ne!(OP_DIFF_MESSAGES, OP_DIFF_TRACE_RECORD);
    }
}
