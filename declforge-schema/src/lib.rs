//! # declforge Schema
//!
//! Schema entity model consumed by the declforge compilers.
//!
//! This crate provides:
//! - Schema entity, field and field type definitions
//! - JSON document loading for already-parsed schema universes
//! - Universe-level validation (entity name uniqueness)

pub mod document;
pub mod error;
pub mod types;
pub mod validation;

pub use document::{SchemaDocument, TableLookup, load_document, parse_document};
pub use error::{ParseError, SchemaError};
pub use types::{Field, FieldType, NativeType, SchemaEntity};
pub use validation::{find_schema, validate_unique_names};
