//! # Codeintel Languages
//!
//! Declarative per-language grammar descriptors for the structure engine.
//!
//! Each supported language is described by an immutable [`LanguageDescriptor`]
//! that names the tree-sitter node kinds for functions, classes, bodies and
//! call sites. The symbol extractor and the call-graph builder are generic
//! engines driven entirely by these descriptors, so adding a language means
//! adding a descriptor, not touching traversal code.
//!
//! ```rust
//! use codeintel_languages::registry;
//!
//! let reg = registry();
//! assert!(reg.is_supported("src/main.c"));
//! assert!(reg.detect("README.md").is_none());
//! ```

mod builtin;
mod descriptor;
mod registry;

pub use descriptor::{
    ExtractionStrategy, GrammarShape, LanguageDescriptor, NameStrategy,
};
pub use registry::{registry, LanguageRegistry};
