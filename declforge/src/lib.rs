//! # declforge
//!
//! Compile schema entities into TypeScript declarations.
//!
//! A schema universe (named record types whose fields reference primitives,
//! enums, other schemas, or externally compiled tables) is compiled into one
//! file per entity: either a class annotated with `class-validator` /
//! `class-transformer` decorators, or a plain interface.
//!
//! ## Quick Start
//!
//! ```
//! use declforge::prelude::*;
//!
//! let user = SchemaEntity::new("User")
//!     .with_field(Field::new("id", FieldType::native(NativeType::Number)).required())
//!     .with_field(Field::new("roles", FieldType::enumeration("Role")).array());
//!
//! let compiler = Compiler::new(CompilerConfig::default().with_mode(OutputMode::Interface));
//! let output = compiler.compile(&[user], &TableLookup::new())?;
//!
//! assert!(output.files[0].content.contains("roles?: Role[];"));
//! # Ok::<(), CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema entity model and document loading
//! - [`codegen`] - Resolution, classification, rendering and the compiler driver

pub mod prelude;

/// Schema entity model.
pub mod schema {
    pub use declforge_schema::*;
}

/// Declaration compiler.
pub mod codegen {
    pub use declforge_codegen::*;
}
