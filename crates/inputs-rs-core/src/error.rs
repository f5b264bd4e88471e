//! Core error types for the inputs-rs library.
//!
//! The transform and validation pipelines themselves never fail: malformed
//! declaration items are dropped with a diagnostic and failing validators
//! produce a `ValidationResult` value. [`InputsError`] covers the ambient
//! layer around them, such as loading settings or compiling a caller-supplied
//! pattern up front.

use thiserror::Error;

/// The primary error type for the inputs-rs library.
#[derive(Error, Debug)]
pub enum InputsError {
    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── Patterns ─────────────────────────────────────────────────────

    /// A filter pattern could not be compiled.
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern source as supplied by the caller.
        pattern: String,
        /// The compiler's explanation.
        reason: String,
    },

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl InputsError {
    /// Returns a short machine-readable code for this error.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ConfigurationError(_) => "configuration",
            Self::InvalidPattern { .. } => "invalid_pattern",
            Self::SerializationError(_) => "serialization",
            Self::IoError(_) => "io",
        }
    }
}

impl From<serde_json::Error> for InputsError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, InputsError>`.
pub type InputsResult<T> = Result<T, InputsError>;
