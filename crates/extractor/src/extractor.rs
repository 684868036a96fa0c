use crate::types::SymbolRecord;
use crate::walker::{self, Decl};
use codeintel_languages::registry;
use rayon::prelude::*;

/// Extracts named function, method and class spans from source text.
///
/// The extractor is stateless; a tree-sitter parser is created per call
/// because parsers are not shareable across threads.
pub struct SymbolExtractor;

impl SymbolExtractor {
    /// Extract every symbol of one file.
    ///
    /// Files in unregistered languages yield an empty list, as do files
    /// that fail to parse; the failure is logged and never propagated.
    pub fn extract(content: &str, path: &str) -> Vec<SymbolRecord> {
        let Some(descriptor) = registry().detect(path) else {
            return Vec::new();
        };
        if content.trim().is_empty() {
            return Vec::new();
        }

        let tree = match walker::parse_source(content, descriptor) {
            Ok(tree) => tree,
            Err(e) => {
                log::warn!("Failed to parse {path}: {e}");
                return Vec::new();
            }
        };

        let src = content.as_bytes();
        walker::collect_decls(tree.root_node(), src, descriptor)
            .into_iter()
            .map(|decl| to_record(decl, src, path))
            .collect()
    }
}

fn to_record(decl: Decl<'_>, src: &[u8], path: &str) -> SymbolRecord {
    let node = decl.node();
    SymbolRecord {
        name: decl.name().to_string(),
        source: node.utf8_text(src).unwrap_or_default().to_string(),
        // tree-sitter rows are 0-indexed
        start_line: node.start_position().row + 1,
        end_line: node.end_position().row + 1,
        file: path.to_string(),
    }
}

/// Extract symbols from many files in parallel. Per-file extraction shares
/// no mutable state; results are aggregated in input order.
pub fn extract_many(files: &[(String, String)]) -> Vec<SymbolRecord> {
    files
        .par_iter()
        .flat_map_iter(|(path, content)| SymbolExtractor::extract(content, path))
        .collect()
}
