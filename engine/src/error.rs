//! Engine-specific error types

use thiserror::Error;
use shared::SharedError;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Template '{template}' has unresolved variables: {}", missing.join(", "))]
    UnresolvedTemplateVariable { template: String, missing: Vec<String> },

    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    #[error("Unknown history record: {id}")]
    UnknownRecord { id: String },

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl EngineError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput { reason: reason.into() }
    }

    pub fn config(field: impl Into<String>) -> Self {
        Self::ConfigurationError { field: field.into() }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
