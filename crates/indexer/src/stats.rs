use serde::{Deserialize, Serialize};

/// Summary of one indexing run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Files seen in the current snapshot.
    pub files: usize,
    /// Files skipped because their hash was unchanged.
    pub unchanged: usize,
    /// Files whose symbols were (re)extracted.
    pub reextracted: usize,
    /// Files whose stale symbols must be purged downstream.
    pub purged: usize,
    /// Symbols extracted from the reextract set.
    pub symbols: usize,
    /// Nodes in the merged call graph.
    pub graph_nodes: usize,
    /// Edges in the merged call graph.
    pub graph_edges: usize,
}
