//! # declforge Codegen
//!
//! Compiles schema entities into TypeScript declarations.
//!
//! This crate provides:
//! - Field classification into type text and validation directives
//! - Dependency resolution into import declarations
//! - Entity rendering as `class-validator` classes or plain interfaces
//! - The compiler driver that folds a whole universe into output files
//!
//! ```
//! use declforge_codegen::compile_classes;
//! use declforge_schema::{Field, FieldType, NativeType, SchemaEntity, TableLookup};
//!
//! let user = SchemaEntity::new("User")
//!     .with_field(Field::new("id", FieldType::native(NativeType::Number)).required());
//!
//! let output = compile_classes(&[user], &TableLookup::new()).unwrap();
//! assert_eq!(output.map["User"], "./ts-schema/User");
//! assert!(output.files[0].content.contains("id!: number"));
//! ```

pub mod classify;
pub mod config;
pub mod directive;
pub mod error;
pub mod generator;
pub mod output;
pub mod render;
pub mod resolve;
pub mod typescript;

pub use config::{CompilerConfig, OutputMode};
pub use error::CodegenError;
pub use generator::Compiler;
pub use output::{GeneratedFile, Output, SchemaPathMap};

use declforge_schema::{SchemaEntity, TableLookup};

/// Compiles a schema universe into annotated `class-validator` classes.
///
/// # Errors
/// Returns `CodegenError` if a schema or table reference cannot be resolved.
pub fn compile_classes(
    schemas: &[SchemaEntity],
    tables: &TableLookup,
) -> Result<Output, CodegenError> {
    Compiler::new(CompilerConfig::default()).compile(schemas, tables)
}

/// Compiles a schema universe into plain TypeScript interfaces.
///
/// # Errors
/// Returns `CodegenError` if a schema or table reference cannot be resolved.
pub fn compile_interfaces(
    schemas: &[SchemaEntity],
    tables: &TableLookup,
) -> Result<Output, CodegenError> {
    Compiler::new(CompilerConfig::default().with_mode(OutputMode::Interface))
        .compile(schemas, tables)
}

/// Compiles a JSON schema document.
///
/// # Errors
/// Returns `CodegenError` if decoding or compilation fails.
pub fn compile_from_json(json: &str, config: CompilerConfig) -> Result<Output, CodegenError> {
    let document = declforge_schema::parse_document(json)?;
    Compiler::new(config).compile_document(&document)
}

/// Compiles a JSON schema document file.
///
/// # Errors
/// Returns `CodegenError` if reading, decoding, or compilation fails.
pub fn compile_from_file(
    path: &std::path::Path,
    config: CompilerConfig,
) -> Result<Output, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    compile_from_json(&json, config)
}
