//! Dependency resolution.
//!
//! Turns the schema and table references of one entity into import
//! declarations. References are resolved against the closed universe of
//! schema entities and the external model lookup; a dangling reference is
//! fatal.

use crate::config::{CompilerConfig, import_specifier};
use crate::error::CodegenError;
use declforge_schema::{FieldType, SchemaEntity, TableLookup, find_schema};
use std::fmt;

/// One import declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// Imported symbol.
    pub name: String,
    /// Logical path of the defining module.
    pub path: String,
}

impl Import {
    /// Creates an import.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "import {{ {} }} from '{}'",
            self.name,
            import_specifier(&self.path)
        )
    }
}

/// Resolves entity references against a schema universe.
pub struct DependencyResolver<'a> {
    schemas: &'a [SchemaEntity],
    tables: &'a TableLookup,
    config: &'a CompilerConfig,
}

impl<'a> DependencyResolver<'a> {
    /// Creates a resolver over a universe and its external lookup.
    #[must_use]
    pub fn new(
        schemas: &'a [SchemaEntity],
        tables: &'a TableLookup,
        config: &'a CompilerConfig,
    ) -> Self {
        Self {
            schemas,
            tables,
            config,
        }
    }

    /// Resolves one import per referencing field, in field order.
    ///
    /// Repeated references produce repeated imports.
    ///
    /// # Errors
    /// Returns the first unresolved schema, table, or (when enabled) enum
    /// reference.
    pub fn resolve(&self, entity: &SchemaEntity) -> Result<Vec<Import>, CodegenError> {
        let mut imports = Vec::new();

        for field in &entity.items {
            let import = match &field.field_type {
                FieldType::Schema { schema_name } => {
                    let schema = find_schema(self.schemas, schema_name).ok_or_else(|| {
                        CodegenError::unresolved_schema(&entity.name, &field.key, schema_name)
                    })?;
                    Import::new(&schema.name, self.config.logical_path(&schema.name))
                }
                FieldType::Table { table_name } => {
                    let path = self.tables.get(table_name).ok_or_else(|| {
                        CodegenError::unresolved_table(&entity.name, &field.key, table_name)
                    })?;
                    Import::new(table_name, path)
                }
                FieldType::Enum { enum_name } if self.config.import_enums => {
                    let path = self.tables.get(enum_name).ok_or_else(|| {
                        CodegenError::unresolved_enum(&entity.name, &field.key, enum_name)
                    })?;
                    Import::new(enum_name, path)
                }
                FieldType::Enum { .. } | FieldType::Native { .. } => continue,
            };

            tracing::debug!(
                "{}.{} imports {} from {}",
                entity.name,
                field.key,
                import.name,
                import.path
            );
            imports.push(import);
        }

        Ok(imports)
    }
}
