use thiserror::Error;

/// Errors raised by the statement builders, the terms calculator and the
/// host collaborators.
///
/// Validators never return these for malformed input strings; they report
/// an [`IdValidation`](crate::checksum::IdValidation) instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SeError {
    /// An argument had the wrong shape (length, non-numeric, non-finite).
    #[error("{operation}: invalid input '{value}'")]
    InvalidInput { operation: String, value: String },

    /// The requested combination is not implemented (e.g. GUID literals on Oracle).
    #[error("not supported: {0}")]
    Unsupported(String),

    /// Stored configuration could not be interpreted.
    #[error("malformed data in '{field}': '{value}'")]
    MalformedData { field: String, value: String },

    /// One or more rule checks failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The host database or session reported a failure.
    #[error("host error: {0}")]
    Host(String),
}

impl SeError {
    pub(crate) fn invalid_input(operation: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            operation: operation.into(),
            value: value.into(),
        }
    }

    pub(crate) fn malformed(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedData {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// A single rule finding with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the offending field (e.g. "split.split_day").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Short rule identifier if applicable (e.g. "TERMS-02").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a validation error without a rule ID.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a validation error with a rule ID.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}
