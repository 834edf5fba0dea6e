//! Prelude module for convenient imports.
//!
//! ```
//! use declforge::prelude::*;
//! ```

// Schema model
pub use declforge_schema::{
    Field, FieldType, NativeType, SchemaDocument, SchemaEntity, TableLookup, load_document,
    parse_document,
};

// Compiler
pub use declforge_codegen::{
    CodegenError, Compiler, CompilerConfig, GeneratedFile, Output, OutputMode, SchemaPathMap,
    compile_classes, compile_interfaces,
};
