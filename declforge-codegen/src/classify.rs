//! Field classification.
//!
//! Maps a field's type tag and cardinality to the type text shared by every
//! output mode. Mode-specific directives are built on top of [`classify`] by
//! the styles in [`crate::typescript`].

use declforge_schema::{Field, FieldType, NativeType};

/// Classification of a field type for rendering purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass<'a> {
    /// Primitive value.
    Native(NativeType),
    /// Enumeration, by name.
    Enum(&'a str),
    /// Nested object: another schema or an external table, by name.
    Nested(&'a str),
}

/// Classifies a field by its type tag.
#[must_use]
pub fn classify(field: &Field) -> TypeClass<'_> {
    match &field.field_type {
        FieldType::Native { native_type } => TypeClass::Native(*native_type),
        FieldType::Enum { enum_name } => TypeClass::Enum(enum_name),
        FieldType::Schema { schema_name } => TypeClass::Nested(schema_name),
        FieldType::Table { table_name } => TypeClass::Nested(table_name),
    }
}

/// Returns the rendered type of a field, `[]` appended for arrays.
#[must_use]
pub fn type_text(field: &Field) -> String {
    let base = match classify(field) {
        TypeClass::Native(native) => native.ts_name(),
        TypeClass::Enum(name) | TypeClass::Nested(name) => name,
    };

    if field.array {
        format!("{base}[]")
    } else {
        base.to_string()
    }
}

/// Renders a member declaration line.
///
/// `required_marker` follows the key on required members; optional members
/// always use `?`.
#[must_use]
pub fn member_line(field: &Field, required_marker: &str, terminator: &str) -> String {
    let marker = if field.required { required_marker } else { "?" };
    format!("{}{}: {}{}", field.key, marker, type_text(field), terminator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_kind() {
        let number = Field::new("n", FieldType::native(NativeType::Number));
        let role = Field::new("r", FieldType::enumeration("Role"));
        let address = Field::new("a", FieldType::schema("Address"));
        let product = Field::new("p", FieldType::table("Product"));

        assert_eq!(classify(&number), TypeClass::Native(NativeType::Number));
        assert_eq!(classify(&role), TypeClass::Enum("Role"));
        assert_eq!(classify(&address), TypeClass::Nested("Address"));
        assert_eq!(classify(&product), TypeClass::Nested("Product"));
    }

    #[test]
    fn test_type_text() {
        let scalar = Field::new("id", FieldType::native(NativeType::Number));
        let list = Field::new("tags", FieldType::native(NativeType::String)).array();
        let nested = Field::new("items", FieldType::table("Product")).array();

        assert_eq!(type_text(&scalar), "number");
        assert_eq!(type_text(&list), "string[]");
        assert_eq!(type_text(&nested), "Product[]");
    }

    #[test]
    fn test_member_line_markers() {
        let required = Field::new("id", FieldType::native(NativeType::Number)).required();
        let optional = Field::new("roles", FieldType::enumeration("Role")).array();

        assert_eq!(member_line(&required, "!", ""), "id!: number");
        assert_eq!(member_line(&optional, "!", ""), "roles?: Role[]");
        assert_eq!(member_line(&required, "", ";"), "id: number;");
        assert_eq!(member_line(&optional, "", ";"), "roles?: Role[];");
    }
}
