//! Annotated class style.
//!
//! Members carry `class-validator` checks and `class-transformer` coercions
//! so a plain payload can be turned into a validated instance.

use super::DeclarationStyle;
use super::runtime::{ALL_COERCIONS, Coercion, runtime_file};
use crate::classify::{TypeClass, classify, member_line};
use crate::config::{CompilerConfig, import_specifier};
use crate::directive::{Directive, DirectiveBuilder};
use crate::output::GeneratedFile;
use declforge_schema::{Field, NativeType};

/// Renders `class-validator` annotated classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassValidatorStyle;

/// Shared instance used by [`super::style_for`].
pub static CLASS_STYLE: ClassValidatorStyle = ClassValidatorStyle;

impl DirectiveBuilder for ClassValidatorStyle {
    fn directives(&self, field: &Field) -> Vec<Directive> {
        let mut directives = Vec::new();
        let key = field.key.clone();
        let each = field.array;

        if field.required {
            directives.push(Directive::IsNotEmpty { key: key.clone() });
        } else {
            directives.push(Directive::IsOptional);
        }

        match classify(field) {
            TypeClass::Native(native) => {
                if let Some(coercion) = Coercion::for_native(native, each) {
                    directives.push(Directive::Transform(coercion));
                }
                directives.push(match native {
                    NativeType::Number => Directive::IsNumber { key, each },
                    NativeType::Boolean => Directive::IsBoolean { key, each },
                    NativeType::String => Directive::IsString { key, each },
                });
            }
            TypeClass::Enum(enum_name) => {
                directives.push(Directive::IsEnum {
                    key,
                    enum_name: enum_name.to_string(),
                    each,
                });
            }
            TypeClass::Nested(name) => {
                if each {
                    directives.push(Directive::IsArray);
                }
                directives.push(Directive::ValidateNested { each });
                if !each {
                    directives.push(Directive::IsObject);
                }
                directives.push(Directive::Type {
                    name: name.to_string(),
                });
            }
        }

        directives
    }
}

impl DeclarationStyle for ClassValidatorStyle {
    fn keyword(&self) -> &'static str {
        "class"
    }

    fn preamble(&self, config: &CompilerConfig) -> Vec<String> {
        let helpers: Vec<_> = ALL_COERCIONS.iter().map(|c| c.helper_name()).collect();

        vec![
            r#"import { Transform, Type } from "class-transformer";"#.to_string(),
            r#"import { IsNotEmpty, IsNumber, IsObject, IsBoolean, IsOptional, IsString, IsEnum, ValidateNested, IsArray } from "class-validator";"#.to_string(),
            format!(
                "import {{ {} }} from '{}';",
                helpers.join(", "),
                import_specifier(&config.runtime_path())
            ),
        ]
    }

    fn member(&self, field: &Field) -> String {
        member_line(field, "!", "")
    }

    fn support_files(&self, config: &CompilerConfig) -> Vec<GeneratedFile> {
        vec![runtime_file(config)]
    }
}
