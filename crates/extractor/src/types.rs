use serde::{Deserialize, Serialize};

/// One extracted function, method or class definition.
///
/// `name` is the dot-separated qualified name (`Class.method` for methods),
/// unique within its file: the class prefix disambiguates methods across
/// classes. Lines are 1-indexed and inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRecord {
    pub name: String,
    pub source: String,
    pub start_line: usize,
    pub end_line: usize,
    /// Relative path of the owning file.
    pub file: String,
}

impl SymbolRecord {
    pub fn line_count(&self) -> usize {
        self.end_line.saturating_sub(self.start_line) + 1
    }
}
