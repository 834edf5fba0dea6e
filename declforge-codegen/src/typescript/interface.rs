//! Plain interface style.

use super::DeclarationStyle;
use crate::classify::member_line;
use crate::config::CompilerConfig;
use crate::directive::{Directive, DirectiveBuilder};
use crate::output::GeneratedFile;
use declforge_schema::Field;

/// Renders structural interfaces with no validation metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceStyle;

/// Shared instance used by [`super::style_for`].
pub static INTERFACE_STYLE: InterfaceStyle = InterfaceStyle;

impl DirectiveBuilder for InterfaceStyle {
    fn directives(&self, _field: &Field) -> Vec<Directive> {
        Vec::new()
    }
}

impl DeclarationStyle for InterfaceStyle {
    fn keyword(&self) -> &'static str {
        "interface"
    }

    fn preamble(&self, _config: &CompilerConfig) -> Vec<String> {
        Vec::new()
    }

    fn member(&self, field: &Field) -> String {
        member_line(field, "", ";")
    }

    fn support_files(&self, _config: &CompilerConfig) -> Vec<GeneratedFile> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use declforge_schema::{FieldType, NativeType};

    #[test]
    fn test_interface_members() {
        let style = InterfaceStyle;
        let id = Field::new("id", FieldType::native(NativeType::Number)).required();
        let tags = Field::new("tags", FieldType::native(NativeType::String)).array();

        assert_eq!(style.member(&id), "id: number;");
        assert_eq!(style.member(&tags), "tags?: string[];");
        assert!(style.directives(&id).is_empty());
    }

    #[test]
    fn test_interface_has_no_preamble_or_support() {
        let config = CompilerConfig::default();
        assert!(InterfaceStyle.preamble(&config).is_empty());
        assert!(InterfaceStyle.support_files(&config).is_empty());
    }
}
