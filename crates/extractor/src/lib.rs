//! # Codeintel Extractor
//!
//! Language-agnostic symbol extraction for the structure engine.
//!
//! ## Pipeline
//!
//! ```text
//! (relative_path, text)
//!     │
//!     ├──> Language detection (registry, by extension)
//!     │
//!     ├──> Tree-sitter parse
//!     │
//!     └──> One of two walks
//!          ├─> Native-AST walk (Python): top-level defs + one level
//!          │   of class methods, named Class.method
//!          └─> Grammar-driven walk (everything else): a single generic
//!              traversal parameterized by the language's GrammarShape
//! ```
//!
//! A file in an unregistered language yields no symbols; a parse failure is
//! logged and yields no symbols. Neither ever aborts a batch.

mod error;
mod extractor;
mod types;
pub mod walker;

pub use error::{ExtractorError, Result};
pub use extractor::{extract_many, SymbolExtractor};
pub use types::SymbolRecord;
