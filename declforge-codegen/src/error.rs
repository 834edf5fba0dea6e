//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema document decoding error.
    #[error("schema parse error: {0}")]
    Parse(#[from] declforge_schema::ParseError),

    /// Schema universe validation error.
    #[error("schema error: {0}")]
    Schema(#[from] declforge_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A field references a schema missing from the universe.
    #[error("schema \"{name}\" is not available (field '{field}' of '{entity}')")]
    UnresolvedSchema {
        /// Entity that owns the field.
        entity: String,
        /// Field key.
        field: String,
        /// Missing schema name.
        name: String,
    },

    /// A field references a table missing from the model lookup.
    #[error("table \"{name}\" is not available on models (field '{field}' of '{entity}')")]
    UnresolvedTable {
        /// Entity that owns the field.
        entity: String,
        /// Field key.
        field: String,
        /// Missing table name.
        name: String,
    },

    /// A field references an enum missing from the model lookup.
    #[error("enum \"{name}\" is not available on models (field '{field}' of '{entity}')")]
    UnresolvedEnum {
        /// Entity that owns the field.
        entity: String,
        /// Field key.
        field: String,
        /// Missing enum name.
        name: String,
    },
}

impl CodegenError {
    /// Creates an unresolved schema error.
    pub fn unresolved_schema(
        entity: impl Into<String>,
        field: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::UnresolvedSchema {
            entity: entity.into(),
            field: field.into(),
            name: name.into(),
        }
    }

    /// Creates an unresolved table error.
    pub fn unresolved_table(
        entity: impl Into<String>,
        field: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::UnresolvedTable {
            entity: entity.into(),
            field: field.into(),
            name: name.into(),
        }
    }

    /// Creates an unresolved enum error.
    pub fn unresolved_enum(
        entity: impl Into<String>,
        field: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::UnresolvedEnum {
            entity: entity.into(),
            field: field.into(),
            name: name.into(),
        }
    }

    /// Returns the missing reference name for resolution errors.
    #[must_use]
    pub fn missing_name(&self) -> Option<&str> {
        match self {
            Self::UnresolvedSchema { name, .. }
            | Self::UnresolvedTable { name, .. }
            | Self::UnresolvedEnum { name, .. } => Some(name),
            _ => None,
        }
    }
}
