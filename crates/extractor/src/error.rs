use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractorError>;

/// Errors that can occur while setting up or running extraction.
///
/// Per-file failures are absorbed into empty results by the batch API;
/// these variants surface only through the lower-level entry points.
#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),

    #[error("Parse error in {0}")]
    Parse(String),
}
