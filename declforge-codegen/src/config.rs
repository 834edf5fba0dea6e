//! Compiler configuration.

use serde::{Deserialize, Serialize};

/// Shape of the generated declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Classes annotated with `class-validator` / `class-transformer` decorators.
    #[default]
    Class,
    /// Plain structural interfaces.
    Interface,
}

impl OutputMode {
    /// Parses an output mode from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "class" | "classes" => Some(Self::Class),
            "interface" | "interfaces" => Some(Self::Interface),
            _ => None,
        }
    }

    /// Returns the canonical name of the mode.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
        }
    }
}

/// Configuration for a compiler run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Output mode.
    pub mode: OutputMode,
    /// Logical subdirectory all entity files are placed under.
    pub output_dir: String,
    /// File extension appended to emitted files.
    pub extension: String,
    /// Keep the later entry instead of failing on duplicate entity names.
    pub allow_duplicate_names: bool,
    /// Resolve enum fields through the model lookup and import them.
    pub import_enums: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::Class,
            output_dir: "ts-schema".to_string(),
            extension: "ts".to_string(),
            allow_duplicate_names: false,
            import_enums: false,
        }
    }
}

impl CompilerConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output mode.
    #[must_use]
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the logical output subdirectory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the emitted file extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Tolerates duplicate entity names (later entry wins).
    #[must_use]
    pub fn allow_duplicate_names(mut self, allow: bool) -> Self {
        self.allow_duplicate_names = allow;
        self
    }

    /// Enables enum imports through the model lookup.
    #[must_use]
    pub fn import_enums(mut self, enabled: bool) -> Self {
        self.import_enums = enabled;
        self
    }

    /// Returns the canonical logical path of an entity (no extension).
    #[must_use]
    pub fn logical_path(&self, name: &str) -> String {
        format!("./{}/{}", self.output_dir.trim_matches('/'), name)
    }

    /// Returns the emitted file path of an entity.
    #[must_use]
    pub fn file_path(&self, name: &str) -> String {
        self.with_extension_suffix(&self.logical_path(name))
    }

    /// Returns the logical path of the shared coercion runtime.
    #[must_use]
    pub fn runtime_path(&self) -> String {
        self.logical_path("runtime/transform")
    }

    /// Appends the configured extension to a logical path.
    #[must_use]
    pub fn with_extension_suffix(&self, logical_path: &str) -> String {
        if self.extension.is_empty() {
            logical_path.to_string()
        } else {
            format!("{}.{}", logical_path, self.extension.trim_start_matches('.'))
        }
    }
}

/// Converts a logical path into a module specifier usable from inside the
/// output subdirectory.
///
/// Logical paths are relative to the output root, while generated files live
/// one level below it.
#[must_use]
pub fn import_specifier(logical_path: &str) -> String {
    if logical_path.starts_with("./") {
        format!(".{logical_path}")
    } else if logical_path.starts_with("../") || logical_path.starts_with('/') {
        logical_path.to_string()
    } else {
        format!("../{logical_path}")
    }
}
