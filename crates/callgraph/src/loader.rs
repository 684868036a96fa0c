use crate::error::Result;
use crate::types::CallGraph;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// One directed-edge statement: `"caller" -> "callee" [attrs];`
/// Anything else on a line is ignored.
static EDGE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*"?([A-Za-z0-9_.]+)"?\s*->\s*"?([A-Za-z0-9_.]+)"?\s*\[.*\];$"#)
        .expect("edge-list pattern is valid")
});

/// Parse the restricted edge-list text format used for the externally
/// generated privileged-language call graph.
///
/// Every node mentioned as caller or callee becomes a key, including nodes
/// that never appear with outgoing edges.
pub fn parse_edge_list(text: &str) -> CallGraph {
    let mut graph = CallGraph::new();
    for line in text.lines() {
        if let Some(captures) = EDGE_LINE.captures(line.trim_end()) {
            let caller = &captures[1];
            let callee = &captures[2];
            graph.insert_node(caller);
            graph.insert_node(callee);
            graph.add_edge(caller, callee);
        }
    }
    graph
}

/// Load an edge-list file. A missing file is an empty graph, not an error;
/// the importer runs before anything guarantees the file exists.
pub fn load_edge_list(path: impl AsRef<Path>) -> Result<CallGraph> {
    let path = path.as_ref();
    if !path.exists() {
        log::warn!("Edge-list file not found: {}", path.display());
        return Ok(CallGraph::new());
    }
    let text = std::fs::read_to_string(path)?;
    let graph = parse_edge_list(&text);
    log::info!(
        "Edge list loaded from {}: {} nodes",
        path.display(),
        graph.node_count()
    );
    Ok(graph)
}

/// Load a per-language JSON adjacency map; missing file -> empty graph.
pub fn load_adjacency_json(path: impl AsRef<Path>) -> Result<CallGraph> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(CallGraph::new());
    }
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Persist a graph as the per-language JSON adjacency format.
pub fn save_adjacency_json(path: impl AsRef<Path>, graph: &CallGraph) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(graph)?)?;
    Ok(())
}
