use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Synthesize a node id from a file stem and a qualified symbol name:
/// `srv` + `Server.start` -> `srv__Server__start`.
pub fn node_id(file_stem: &str, qualified: &str) -> String {
    format!("{file_stem}__{}", qualified.replace('.', "__"))
}

/// Directed call graph as an adjacency map.
///
/// Every known symbol is a key, including symbols with no calls in or out;
/// isolated nodes are load-bearing (an unused helper is still a node the
/// path finder must answer for). Serializes to the persisted per-language
/// JSON format `{node_id: [node_id, ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallGraph {
    adjacency: BTreeMap<String, Vec<String>>,
}

impl CallGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a node exists, with or without edges.
    pub fn insert_node(&mut self, id: impl Into<String>) {
        self.adjacency.entry(id.into()).or_default();
    }

    /// Add a directed edge. Self-loops are excluded and duplicate
    /// (caller, callee) pairs collapse; the callee is materialized as a
    /// node so edge-less mentions stay queryable.
    pub fn add_edge(&mut self, caller: &str, callee: &str) {
        if caller == callee {
            return;
        }
        self.insert_node(callee);
        let callees = self.adjacency.entry(caller.to_string()).or_default();
        if !callees.iter().any(|c| c == callee) {
            callees.push(callee.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn callees(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Merge another graph into this one. A colliding key unions the
    /// callee lists instead of overwriting; the id namespacing should
    /// prevent collisions, but a collision must never lose edges.
    pub fn merge(&mut self, other: CallGraph) {
        for (node, callees) in other.adjacency {
            let existing = self.adjacency.entry(node).or_default();
            for callee in callees {
                if !existing.iter().any(|c| c == &callee) {
                    existing.push(callee);
                }
            }
        }
    }
}

impl FromIterator<(String, Vec<String>)> for CallGraph {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}
