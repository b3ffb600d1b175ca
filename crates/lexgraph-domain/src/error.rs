//! Error types for the domain layer

use thiserror::Error;

/// Errors that can occur while loading analysis data
#[derive(Error, Debug)]
pub enum DomainError {
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Schema-level validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::JsonParse(e.to_string())
    }
}
