//! Error types for schema loading and validation.

use thiserror::Error;

/// Error type for schema document loading.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for schema universe validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two entities share the same name.
    #[error("duplicate schema definition: '{name}'")]
    DuplicateSchema {
        /// Name of the duplicate.
        name: String,
    },
}

impl SchemaError {
    /// Creates a duplicate schema error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateSchema { name: name.into() }
    }
}
