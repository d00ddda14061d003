//! Error types and exit codes for arktos
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown locale)
//! - 3: Data error (corrupted stored state, missing entry, service rule violation)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the arktos CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - corrupted state, missing entry (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during arktos operations
#[derive(Error, Debug)]
pub enum ArktosError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown locale: {0} (supported: en, ca, es, qq)")]
    UnknownLocale(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("content directory not found: {path:?}")]
    ContentNotFound { path: PathBuf },

    #[error("corrupted stored value for key {key:?}: {source}")]
    CorruptStoredValue {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Service {service} error: {message}")]
    Service { service: String, message: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl ArktosError {
    /// Create an error raised by a collection service
    pub fn service(service: &str, message: impl std::fmt::Display) -> Self {
        ArktosError::Service {
            service: service.to_string(),
            message: message.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        ArktosError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        ArktosError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ArktosError::UnknownFormat(_)
            | ArktosError::UnknownLocale(_)
            | ArktosError::UsageError(_) => ExitCode::Usage,

            ArktosError::ContentNotFound { .. }
            | ArktosError::CorruptStoredValue { .. }
            | ArktosError::Service { .. }
            | ArktosError::NotFound { .. }
            | ArktosError::InvalidConfig { .. } => ExitCode::Data,

            ArktosError::Io(_)
            | ArktosError::Json(_)
            | ArktosError::Toml(_)
            | ArktosError::FailedOperationWithTarget { .. }
            | ArktosError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ArktosError::UnknownFormat(_) => "unknown_format",
            ArktosError::UnknownLocale(_) => "unknown_locale",
            ArktosError::UsageError(_) => "usage_error",
            ArktosError::ContentNotFound { .. } => "content_not_found",
            ArktosError::CorruptStoredValue { .. } => "corrupt_stored_value",
            ArktosError::Service { .. } => "service_error",
            ArktosError::NotFound { .. } => "not_found",
            ArktosError::InvalidConfig { .. } => "invalid_config",
            ArktosError::Io(_) => "io_error",
            ArktosError::Json(_) => "json_error",
            ArktosError::Toml(_) => "toml_error",
            ArktosError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            ArktosError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for arktos operations
pub type Result<T> = std::result::Result<T, ArktosError>;
