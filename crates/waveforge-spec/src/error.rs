//! Error types for the parameter model.

use thiserror::Error;

/// Result type for parameter operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors produced while parsing or validating sound parameters.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Parameter document failed to deserialize.
    #[error("malformed parameter input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// A parameter parsed but lies outside its domain.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name (camelCase, as it appears on the wire).
        name: String,
        /// Error message.
        message: String,
    },
}

impl SpecError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}
