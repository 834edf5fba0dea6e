//! Schema type definitions.
//!
//! This module contains the data structures representing schema entities,
//! their fields, and the closed set of field type kinds.

use serde::{Deserialize, Serialize};

/// A named record type to be compiled into a target declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEntity {
    /// Entity name, used as the declaration name and the output map key.
    pub name: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub items: Vec<Field>,
}

impl SchemaEntity {
    /// Creates a new schema entity without fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Adds a field to the entity.
    pub fn add_field(&mut self, field: Field) {
        self.items.push(field);
    }

    /// Adds a field and returns the entity, for chained construction.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.items.push(field);
        self
    }
}

/// One typed member of a schema entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Member name.
    pub key: String,
    /// Whether a value must be present.
    #[serde(default)]
    pub required: bool,
    /// Whether the member is a sequence of the base type.
    #[serde(default)]
    pub array: bool,
    /// Type of the member.
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl Field {
    /// Creates a new optional, scalar field.
    #[must_use]
    pub fn new(key: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            required: false,
            array: false,
            field_type,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field as an array.
    #[must_use]
    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }
}

/// Field type variants.
///
/// The JSON shape is internally tagged on `type`, e.g.
/// `{"type": "native", "native_type": "number"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldType {
    /// Primitive type.
    Native {
        /// Primitive kind.
        native_type: NativeType,
    },
    /// Reference to an enumeration by name.
    Enum {
        /// Enumeration name.
        enum_name: String,
    },
    /// Reference to another schema entity in the same universe.
    Schema {
        /// Schema entity name.
        schema_name: String,
    },
    /// Reference to an externally compiled table.
    Table {
        /// Table name.
        table_name: String,
    },
}

impl FieldType {
    /// Creates a native field type.
    #[must_use]
    pub const fn native(native_type: NativeType) -> Self {
        Self::Native { native_type }
    }

    /// Creates an enum field type.
    #[must_use]
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::Enum {
            enum_name: name.into(),
        }
    }

    /// Creates a schema reference field type.
    #[must_use]
    pub fn schema(name: impl Into<String>) -> Self {
        Self::Schema {
            schema_name: name.into(),
        }
    }

    /// Creates a table reference field type.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self::Table {
            table_name: name.into(),
        }
    }
}

/// Primitive type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeType {
    /// Decimal number.
    Number,
    /// Boolean.
    Boolean,
    /// String.
    String,
}

impl NativeType {
    /// Returns the TypeScript type name for this primitive.
    #[must_use]
    pub const fn ts_name(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::String => "string",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_type_names() {
        assert_eq!(NativeType::Number.ts_name(), "number");
        assert_eq!(NativeType::Boolean.ts_name(), "boolean");
        assert_eq!(NativeType::String.ts_name(), "string");
    }

    #[test]
    fn test_add_field_keeps_order() {
        let mut entity = SchemaEntity::new("Order");
        entity.add_field(Field::new("id", FieldType::native(NativeType::String)));
        entity.add_field(Field::new("product", FieldType::table("Product")));

        let keys: Vec<_> = entity.items.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["id", "product"]);
    }

    #[test]
    fn test_field_builders() {
        let field = Field::new("tags", FieldType::native(NativeType::String))
            .required()
            .array();
        assert!(field.required);
        assert!(field.array);
    }

    #[test]
    fn test_field_type_json_shape() {
        let json = r#"{"key": "roles", "array": true, "type": {"type": "enum", "enum_name": "Role"}}"#;
        let field: Field = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(field.key, "roles");
        assert!(!field.required);
        assert!(field.array);
        assert_eq!(field.field_type, FieldType::enumeration("Role"));
    }

    #[test]
    fn test_unknown_native_kind_rejected() {
        let json = r#"{"key": "at", "type": {"type": "native", "native_type": "date"}}"#;
        assert!(serde_json::from_str::<Field>(json).is_err());
    }
}
