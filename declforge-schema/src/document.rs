//! Schema document loading.
//!
//! A document is the JSON form of an already-parsed schema universe: the
//! entity list plus the table lookup produced by the companion model
//! compiler.
//!
//! ```json
//! {
//!   "schemas": [
//!     { "name": "User", "items": [
//!       { "key": "id", "required": true, "type": { "type": "native", "native_type": "number" } }
//!     ] }
//!   ],
//!   "tables": { "Product": "./ts-model/table/Product" }
//! }
//! ```

use crate::error::ParseError;
use crate::types::SchemaEntity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Lookup from external table (or enum) name to its logical output path.
pub type TableLookup = BTreeMap<String, String>;

/// An already-parsed schema universe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Schema entities in input order.
    #[serde(default)]
    pub schemas: Vec<SchemaEntity>,
    /// External name to logical path lookup.
    #[serde(default)]
    pub tables: TableLookup,
}

impl SchemaDocument {
    /// Creates a document from its parts.
    #[must_use]
    pub fn new(schemas: Vec<SchemaEntity>, tables: TableLookup) -> Self {
        Self { schemas, tables }
    }

    /// Merges additional lookup entries, overriding existing ones.
    pub fn merge_tables(&mut self, tables: TableLookup) {
        self.tables.extend(tables);
    }
}

/// Parses a schema document from a JSON string.
///
/// # Errors
/// Returns `ParseError::Json` if the input is not a valid document.
pub fn parse_document(json: &str) -> Result<SchemaDocument, ParseError> {
    Ok(serde_json::from_str(json)?)
}

/// Loads a schema document from a JSON file.
///
/// # Errors
/// Returns `ParseError` if reading or decoding fails.
pub fn load_document(path: &Path) -> Result<SchemaDocument, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_document(&json)
}
