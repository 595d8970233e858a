//! Structured errors
//!
//! Errors never crash the process. They are values that carry a
//! machine-readable code plus a message suitable for showing to the user.

use crate::ParamError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const VALIDATION: &str = "VALIDATION";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const COMPUTE_ERROR: &str = "COMPUTE_ERROR";
    pub const IO_ERROR: &str = "IO_ERROR";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Request continued with degraded result
    Warning,
    /// Request failed
    Error,
    /// Process-level failure
    Fatal,
}

/// Structured error reported at the presentation boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Severity level
    pub severity: Severity,
}

impl ProgressionError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn validation(details: impl Into<String>) -> Self {
        Self::new(codes::VALIDATION, details)
            .with_suggestion("Adjust the sequence parameters and retry")
    }

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
            .with_suggestion("Check the request format")
    }

    pub fn compute_error() -> Self {
        Self::new(
            codes::COMPUTE_ERROR,
            "An error occurred while generating the sequence",
        )
    }

    pub fn io_error(details: impl Into<String>) -> Self {
        Self::new(codes::IO_ERROR, format!("I/O error: {}", details.into()))
    }
}

impl std::fmt::Display for ProgressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProgressionError {}

impl From<ParamError> for ProgressionError {
    fn from(err: ParamError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<std::io::Error> for ProgressionError {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err.to_string())
    }
}
