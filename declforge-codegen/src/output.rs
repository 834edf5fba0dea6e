//! Compilation output types.

use std::collections::BTreeMap;

/// Mapping from entity name to its logical output path (no extension).
pub type SchemaPathMap = BTreeMap<String, String>;

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Target path relative to the output root, extension included.
    pub filename: String,
    /// Rendered source text.
    pub content: String,
}

impl GeneratedFile {
    /// Creates a generated file.
    #[must_use]
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// Result of compiling a whole schema universe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    /// One file per schema entity, in input order.
    pub files: Vec<GeneratedFile>,
    /// Entity name to logical path.
    pub map: SchemaPathMap,
    /// Shared runtime files the entity files depend on.
    pub support: Vec<GeneratedFile>,
}

impl Output {
    /// Returns the generated file for an entity.
    #[must_use]
    pub fn file_for(&self, name: &str) -> Option<&GeneratedFile> {
        let logical = self.map.get(name)?;
        self.files.iter().find(|f| {
            f.filename == *logical
                || f.filename
                    .strip_prefix(logical.as_str())
                    .is_some_and(|rest| rest.starts_with('.') && !rest.contains('/'))
        })
    }

    /// Iterates over entity files followed by support files.
    pub fn all_files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter().chain(self.support.iter())
    }

    /// Returns the total number of files, support files included.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len() + self.support.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_output() -> Output {
        let mut map = SchemaPathMap::new();
        map.insert("User".to_string(), "./ts-schema/User".to_string());
        map.insert("UserRole".to_string(), "./ts-schema/UserRole".to_string());
        Output {
            files: vec![
                GeneratedFile::new("./ts-schema/UserRole.ts", "role"),
                GeneratedFile::new("./ts-schema/User.ts", "user"),
            ],
            map,
            support: vec![GeneratedFile::new("./ts-schema/runtime/transform.ts", "rt")],
        }
    }

    #[test]
    fn test_file_for_matches_exact_entity() {
        let output = sample_output();
        assert_eq!(output.file_for("User").map(|f| f.content.as_str()), Some("user"));
        assert_eq!(
            output.file_for("UserRole").map(|f| f.content.as_str()),
            Some("role")
        );
        assert!(output.file_for("Order").is_none());
    }

    #[test]
    fn test_all_files_order() {
        let output = sample_output();
        let names: Vec<_> = output.all_files().map(|f| f.filename.as_str()).collect();
        assert_eq!(names.last(), Some(&"./ts-schema/runtime/transform.ts"));
        assert_eq!(output.file_count(), 3);
    }
}
