//! Shared error types for the prompt engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Unknown provider: {input}")]
    UnknownProvider { input: String },

    #[error("Unknown optimization mode: {input}")]
    UnknownMode { input: String },

    #[error("Unknown focus area: {input}")]
    UnknownFocusArea { input: String },

    #[error("Unknown technique category: {input}")]
    UnknownCategory { input: String },

    #[error("Serialization failed: {message}")]
    SerializationError { message: String },

    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
