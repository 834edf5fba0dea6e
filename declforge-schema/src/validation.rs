//! Schema universe validation utilities.
//!
//! The compiler treats the entity list as a closed universe. These helpers
//! check the one structural invariant it relies on and look entities up by
//! exact name.

use crate::error::SchemaError;
use crate::types::SchemaEntity;
use std::collections::HashSet;

/// Validates that every entity name in the universe is unique.
///
/// # Errors
/// Returns `SchemaError::DuplicateSchema` naming the first repeated entity.
pub fn validate_unique_names(schemas: &[SchemaEntity]) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for schema in schemas {
        if !seen.insert(schema.name.as_str()) {
            return Err(SchemaError::duplicate(&schema.name));
        }
    }

    Ok(())
}

/// Finds a schema entity by exact name match.
#[must_use]
pub fn find_schema<'a>(schemas: &'a [SchemaEntity], name: &str) -> Option<&'a SchemaEntity> {
    schemas.iter().find(|s| s.name == name)
}
