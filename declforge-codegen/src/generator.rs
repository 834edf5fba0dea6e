//! Compiler driver.
//!
//! Runs resolution and rendering for every entity of a universe and folds
//! the results into one [`Output`]. Compilation is a single pure pass: the
//! first unresolved reference aborts the whole batch and nothing is
//! returned for the entities that did compile.

use crate::config::CompilerConfig;
use crate::error::CodegenError;
use crate::output::{Output, SchemaPathMap};
use crate::render::{EntityRenderer, RenderedEntity};
use crate::resolve::DependencyResolver;
use crate::typescript::{DeclarationStyle, style_for};
use declforge_schema::{SchemaDocument, SchemaEntity, TableLookup, validate_unique_names};

/// Compiles schema universes into TypeScript declarations.
pub struct Compiler {
    config: CompilerConfig,
    style: &'static dyn DeclarationStyle,
}

impl Compiler {
    /// Creates a compiler using the built-in style for the configured mode.
    #[must_use]
    pub fn new(config: CompilerConfig) -> Self {
        let style = style_for(config.mode);
        Self { config, style }
    }

    /// Compiles every entity of a universe.
    ///
    /// # Arguments
    /// * `schemas` - The closed universe of schema entities, in output order
    /// * `tables` - External table name to logical path lookup
    ///
    /// # Errors
    /// Returns `CodegenError` on the first unresolved reference, or on
    /// duplicate entity names unless they are explicitly allowed.
    pub fn compile(
        &self,
        schemas: &[SchemaEntity],
        tables: &TableLookup,
    ) -> Result<Output, CodegenError> {
        if let Err(err) = validate_unique_names(schemas) {
            if !self.config.allow_duplicate_names {
                return Err(err.into());
            }
            tracing::warn!("{}, keeping the later entry", err);
        }

        let resolver = DependencyResolver::new(schemas, tables, &self.config);
        let renderer = EntityRenderer::new(&self.config, self.style);

        let rendered = schemas
            .iter()
            .map(|entity| -> Result<RenderedEntity, CodegenError> {
                let imports = resolver.resolve(entity)?;
                tracing::debug!(
                    "Compiled {} ({} fields, {} imports)",
                    entity.name,
                    entity.items.len(),
                    imports.len()
                );
                Ok(renderer.render(entity, &imports))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut output = Output {
            files: Vec::with_capacity(rendered.len()),
            map: SchemaPathMap::new(),
            support: self.style.support_files(&self.config),
        };
        for entity in rendered {
            output.map.insert(entity.name, entity.logical_path);
            output.files.push(entity.file);
        }

        tracing::info!(
            "Compiled {} schemas as {} declarations ({} support files)",
            output.files.len(),
            self.style.keyword(),
            output.support.len()
        );

        Ok(output)
    }

    /// Compiles a single entity against a universe.
    ///
    /// # Errors
    /// Returns `CodegenError` if one of the entity's references is unresolved.
    pub fn compile_entity(
        &self,
        entity: &SchemaEntity,
        schemas: &[SchemaEntity],
        tables: &TableLookup,
    ) -> Result<RenderedEntity, CodegenError> {
        let imports = DependencyResolver::new(schemas, tables, &self.config).resolve(entity)?;
        Ok(EntityRenderer::new(&self.config, self.style).render(entity, &imports))
    }

    /// Compiles a loaded schema document.
    ///
    /// # Errors
    /// Returns `CodegenError` on the first unresolved reference.
    pub fn compile_document(&self, document: &SchemaDocument) -> Result<Output, CodegenError> {
        self.compile(&document.schemas, &document.tables)
    }
}
