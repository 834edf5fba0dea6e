//! TypeScript declaration styles.

pub mod class;
pub mod interface;
pub mod runtime;

pub use class::{CLASS_STYLE, ClassValidatorStyle};
pub use interface::{INTERFACE_STYLE, InterfaceStyle};
pub use runtime::{Coerced, Coercion};

use crate::config::{CompilerConfig, OutputMode};
use crate::directive::DirectiveBuilder;
use crate::output::GeneratedFile;
use declforge_schema::Field;

/// Mode-specific pieces of an entity declaration.
///
/// The resolver and type text are shared by every style; a style only
/// decides the declaration keyword, the static preamble, the member syntax
/// and which directives (if any) to attach.
pub trait DeclarationStyle: DirectiveBuilder {
    /// Declaration keyword (`class`, `interface`).
    fn keyword(&self) -> &'static str;

    /// Static import lines emitted after the dependency imports.
    fn preamble(&self, config: &CompilerConfig) -> Vec<String>;

    /// Renders a member declaration line.
    fn member(&self, field: &Field) -> String;

    /// Shared files entity files depend on.
    fn support_files(&self, config: &CompilerConfig) -> Vec<GeneratedFile>;
}

/// Returns the built-in style for an output mode.
#[must_use]
pub fn style_for(mode: OutputMode) -> &'static dyn DeclarationStyle {
    match mode {
        OutputMode::Class => &CLASS_STYLE,
        OutputMode::Interface => &INTERFACE_STYLE,
    }
}
