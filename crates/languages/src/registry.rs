use crate::builtin::builtin_descriptors;
use crate::descriptor::LanguageDescriptor;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

/// Central registry for all language-specific configuration.
///
/// Built once at startup and shared by reference; no mutation afterwards.
pub struct LanguageRegistry {
    languages: Vec<LanguageDescriptor>,
    by_extension: HashMap<&'static str, usize>,
}

impl LanguageRegistry {
    /// Registry with no languages. Mostly useful in tests.
    pub fn empty() -> Self {
        Self {
            languages: Vec::new(),
            by_extension: HashMap::new(),
        }
    }

    /// Registry preloaded with every built-in language.
    pub fn with_builtins() -> Self {
        let mut reg = Self::empty();
        for descriptor in builtin_descriptors() {
            reg.register(descriptor);
        }
        reg
    }

    pub fn register(&mut self, descriptor: LanguageDescriptor) {
        let idx = self.languages.len();
        for ext in descriptor.extensions {
            self.by_extension.insert(ext, idx);
        }
        self.languages.push(descriptor);
    }

    /// Detect the language of a file by extension, case-insensitively.
    /// Unknown extensions yield `None`; callers skip, never fail.
    pub fn detect(&self, path: impl AsRef<Path>) -> Option<&LanguageDescriptor> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        let idx = *self.by_extension.get(ext.as_str())?;
        self.languages.get(idx)
    }

    pub fn is_supported(&self, path: impl AsRef<Path>) -> bool {
        self.detect(path).is_some()
    }

    /// Strip a registered language extension from a path; identity when the
    /// extension is unknown.
    pub fn strip_extension(&self, path: &str) -> String {
        if self.is_supported(path) {
            match path.rfind('.') {
                Some(dot) => path[..dot].to_string(),
                None => path.to_string(),
            }
        } else {
            path.to_string()
        }
    }

    /// Languages whose symbols and call graphs come from the generic
    /// grammar-driven engine. Excludes native-AST languages (Python), whose
    /// call graph is imported from an external edge list instead.
    pub fn grammar_driven_languages(&self) -> impl Iterator<Item = &LanguageDescriptor> {
        self.languages.iter().filter(|l| l.is_grammar_driven())
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &LanguageDescriptor> {
        self.languages.iter()
    }

    pub fn get(&self, name: &str) -> Option<&LanguageDescriptor> {
        self.languages.iter().find(|l| l.name == name)
    }

    /// All registered file extensions (lowercase, without the dot).
    pub fn extensions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_extension.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

static REGISTRY: Lazy<LanguageRegistry> = Lazy::new(LanguageRegistry::with_builtins);

/// Process-wide registry, built lazily on first use and immutable after.
pub fn registry() -> &'static LanguageRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detects_every_builtin_by_extension() {
        let reg = registry();
        for descriptor in reg.descriptors() {
            for ext in descriptor.extensions {
                let path = format!("src/example.{ext}");
                let detected = reg.detect(&path).expect("extension should resolve");
                assert_eq!(detected.name, descriptor.name);
                assert!(reg.is_supported(&path));
            }
        }
    }

    #[test]
    fn detection_is_case_insensitive() {
        let reg = registry();
        assert_eq!(reg.detect("MAIN.C").unwrap().name, "c");
        assert_eq!(reg.detect("App.JAVA").unwrap().name, "java");
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let reg = registry();
        assert!(reg.detect("notes.md").is_none());
        assert!(reg.detect("Makefile").is_none());
        assert!(!reg.is_supported("notes.md"));
    }

    #[test]
    fn strip_extension_only_for_registered_languages() {
        let reg = registry();
        assert_eq!(reg.strip_extension("src/app.py"), "src/app");
        assert_eq!(reg.strip_extension("lib/util.cpp"), "lib/util");
        assert_eq!(reg.strip_extension("notes.md"), "notes.md");
        assert_eq!(reg.strip_extension("no_extension"), "no_extension");
    }

    #[test]
    fn grammar_driven_excludes_python() {
        let reg = registry();
        let names: Vec<&str> = reg.grammar_driven_languages().map(|l| l.name).collect();
        assert!(!names.contains(&"python"));
        assert!(names.contains(&"c"));
        assert!(names.contains(&"go"));
    }

    #[test]
    fn custom_registration_needs_no_engine_changes() {
        use crate::descriptor::{ExtractionStrategy, GrammarShape, NameStrategy};

        let mut reg = LanguageRegistry::empty();
        reg.register(LanguageDescriptor::new(
            "kotlinish",
            &["ktx"],
            ExtractionStrategy::Grammar(GrammarShape {
                function_types: &["function_declaration"],
                class_types: &["class_declaration"],
                class_body_type: Some("class_body"),
                function_body_type: "function_body",
                call_types: &["call_expression"],
                container_types: &[],
                name_strategy: NameStrategy::NameField,
                class_name_type: Some("identifier"),
            }),
            || tree_sitter_java::LANGUAGE.into(),
        ));
        assert_eq!(reg.detect("a.ktx").unwrap().name, "kotlinish");
        assert_eq!(reg.grammar_driven_languages().count(), 1);
    }
}
