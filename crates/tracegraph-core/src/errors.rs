use thiserror::Error;

/// Result type alias using TraceGraphError
pub type Result<T> = std::result::Result<T, TraceGraphError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that outer layers (CLI, log
/// events, tests) match on instead of parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    DuplicateId,
    NotFound,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::DuplicateId => "ERR_DUPLICATE_ID",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional operation/entity context for
/// logging and user-facing reports.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (node id, message id, record index)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for tracegraph operations
///
/// The pure layout and diff engines never return these; they come from the
/// opt-in validators, trace parsing and configuration loading.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraceGraphError {
    // ===== Forest Validation =====
    /// A node identifier appears more than once in the forest
    #[error("Duplicate node id in forest: {node_id}")]
    DuplicateNodeId { node_id: String },

    /// A node has an empty identifier
    #[error("Node with empty id under parent {parent_id:?}")]
    EmptyNodeId { parent_id: Option<String> },

    // ===== Layout Configuration =====
    /// Layout metrics are not usable (non-finite or non-positive sizes)
    #[error("Invalid layout metrics: {reason}")]
    InvalidMetrics { reason: String },

    // ===== Trace Records =====
    /// A JSONL trace line could not be parsed
    #[error("Malformed trace record on line {line}: {message}")]
    TraceRecordParse { line: usize, message: String },

    /// Requested trace record index is out of range
    #[error("Trace record {index} not found ({available} records available)")]
    TraceRecordNotFound { index: usize, available: usize },

    // ===== Integration =====
    /// Serialization / deserialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Filesystem failure
    #[error("IO error: {message}")]
    Io { message: String },
}

impl From<TraceGraphError> for ExError {
    fn from(err: TraceGraphError) -> Self {
        match err {
            TraceGraphError::DuplicateNodeId { node_id } => {
                ExError::new(ExErrorKind::DuplicateId)
                    .with_entity_id(node_id)
                    .with_op("validate_forest")
                    .with_message("Node id appears more than once")
            }

            TraceGraphError::EmptyNodeId { parent_id } => {
                let err = ExError::new(ExErrorKind::InvalidInput)
                    .with_op("validate_forest")
                    .with_message("Node id must not be empty");
                match parent_id {
                    Some(parent_id) => err.with_entity_id(parent_id),
                    None => err,
                }
            }

            TraceGraphError::InvalidMetrics { reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("layout_metrics")
                .with_message(reason),

            TraceGraphError::TraceRecordParse { line, message } => {
                ExError::new(ExErrorKind::Serialization)
                    .with_op("parse_trace_jsonl")
                    .with_entity_id(format!("line:{}", line))
                    .with_message(message)
            }

            TraceGraphError::TraceRecordNotFound { index, available } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity_id(format!("record:{}", index))
                    .with_message(format!("{} records available", available))
            }

            TraceGraphError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            TraceGraphError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),
        }
    }
}

impl From<serde_json::Error> for TraceGraphError {
    fn from(err: serde_json::Error) -> Self {
        TraceGraphError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for TraceGraphError {
    fn from(err: std::io::Error) -> Self {
        TraceGraphError::Io {
            message: err.to_string(),
        }
    }
}
