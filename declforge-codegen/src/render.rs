//! Entity rendering.

use crate::config::CompilerConfig;
use crate::output::GeneratedFile;
use crate::resolve::Import;
use crate::typescript::DeclarationStyle;
use declforge_schema::{Field, SchemaEntity};

const INDENT: &str = "  ";

/// One rendered entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntity {
    /// Entity name.
    pub name: String,
    /// Canonical logical path (no extension).
    pub logical_path: String,
    /// Emitted file.
    pub file: GeneratedFile,
}

/// Assembles import lines and field declarations into one output unit.
pub struct EntityRenderer<'a> {
    config: &'a CompilerConfig,
    style: &'a dyn DeclarationStyle,
}

impl<'a> EntityRenderer<'a> {
    /// Creates a renderer for a style.
    #[must_use]
    pub fn new(config: &'a CompilerConfig, style: &'a dyn DeclarationStyle) -> Self {
        Self { config, style }
    }

    /// Renders an entity with its resolved imports.
    #[must_use]
    pub fn render(&self, entity: &SchemaEntity, imports: &[Import]) -> RenderedEntity {
        let mut lines: Vec<String> = imports.iter().map(ToString::to_string).collect();
        lines.push(String::new());

        let preamble = self.style.preamble(self.config);
        if !preamble.is_empty() {
            lines.extend(preamble);
            lines.push(String::new());
        }

        lines.push(format!("export {} {} {{", self.style.keyword(), entity.name));
        for field in &entity.items {
            for line in self.render_field(field) {
                lines.push(format!("{INDENT}{line}"));
            }
        }
        lines.push("}".to_string());

        let mut content = lines.join("\n");
        content.push('\n');

        RenderedEntity {
            name: entity.name.clone(),
            logical_path: self.config.logical_path(&entity.name),
            file: GeneratedFile::new(self.config.file_path(&entity.name), content),
        }
    }

    /// Renders a field's directives followed by its member line.
    #[must_use]
    pub fn render_field(&self, field: &Field) -> Vec<String> {
        let mut lines: Vec<String> = self
            .style
            .directives(field)
            .iter()
            .map(ToString::to_string)
            .collect();
        lines.push(self.style.member(field));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typescript::{CLASS_STYLE, INTERFACE_STYLE};
    use declforge_schema::{FieldType, NativeType};

    fn user() -> SchemaEntity {
        SchemaEntity::new("User")
            .with_field(Field::new("id", FieldType::native(NativeType::Number)).required())
            .with_field(Field::new("address", FieldType::schema("Address")))
    }

    #[test]
    fn test_render_interface() {
        let config = CompilerConfig::default();
        let renderer = EntityRenderer::new(&config, &INTERFACE_STYLE);
        let imports = vec![Import::new("Address", "./ts-schema/Address")];

        let rendered = renderer.render(&user(), &imports);
        assert_eq!(rendered.logical_path, "./ts-schema/User");
        assert_eq!(rendered.file.filename, "./ts-schema/User.ts");
        assert_eq!(
            rendered.file.content,
            "import { Address } from '../ts-schema/Address'\n\
             \n\
             export interface User {\n  \
             id: number;\n  \
             address?: Address;\n\
             }\n"
        );
    }

    #[test]
    fn test_render_class_layout() {
        let config = CompilerConfig::default();
        let renderer = EntityRenderer::new(&config, &CLASS_STYLE);
        let imports = [Import::new("Address", "./ts-schema/Address")];
        let rendered = renderer.render(&user(), &imports);
        let lines: Vec<_> = rendered.file.content.lines().collect();

        assert_eq!(lines[0], "import { Address } from '../ts-schema/Address'");
        assert_eq!(lines[1], "");
        assert!(lines[2].contains("class-transformer"));
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "export class User {");
        assert_eq!(lines[7], "  @IsNotEmpty({ message: 'id cannot be empty' })");
        assert_eq!(lines[8], "  @Transform(transformNumber)");
        assert_eq!(lines[10], "  id!: number");
        assert_eq!(lines.last(), Some(&"}"));
    }

    #[test]
    fn test_render_empty_entity() {
        let config = CompilerConfig::default();
        let renderer = EntityRenderer::new(&config, &INTERFACE_STYLE);
        let rendered = renderer.render(&SchemaEntity::new("Empty"), &[]);
        assert_eq!(rendered.file.content, "\nexport interface Empty {\n}\n");
    }
}
