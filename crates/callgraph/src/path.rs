use crate::types::CallGraph;
use std::collections::{HashMap, HashSet, VecDeque};

/// Breadth-first shortest path from `start` to `end` in the unweighted
/// directed graph. Returns `None` when either endpoint is absent or no
/// path exists; `find_path(a, a)` is `Some([a])` when `a` is a node.
///
/// The traversal is read-only over an immutable graph snapshot, so
/// independent queries are safe to run concurrently.
pub fn find_path(graph: &CallGraph, start: &str, end: &str) -> Option<Vec<String>> {
    if !graph.contains(start) || !graph.contains(end) {
        return None;
    }

    let mut queue = VecDeque::from([start]);
    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut parent: HashMap<&str, &str> = HashMap::new();

    while let Some(current) = queue.pop_front() {
        if current == end {
            let mut path = vec![current.to_string()];
            let mut node = current;
            while let Some(&prev) = parent.get(node) {
                path.push(prev.to_string());
                node = prev;
            }
            path.reverse();
            return Some(path);
        }
        for neighbor in graph.callees(current) {
            let neighbor = neighbor.as_str();
            if visited.insert(neighbor) {
                parent.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }
    None
}

/// Align a node id against a graph keyed with a different scope-prefix
/// convention. Tries the exact id first, then progressively strips leading
/// `__`-delimited segments until something matches or the name is
/// exhausted. Deliberately lossy; recall over precision.
pub fn align_node_name(graph: &CallGraph, name: &str) -> Option<String> {
    if graph.contains(name) {
        return Some(name.to_string());
    }
    let parts: Vec<&str> = name.split("__").collect();
    for skip in 1..parts.len() {
        let candidate = parts[skip..].join("__");
        if graph.contains(&candidate) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chain() -> CallGraph {
        let mut graph = CallGraph::new();
        graph.add_edge("a", "b");
        graph.add_edge("b", "c");
        graph.add_edge("c", "d");
        graph
    }

    #[test]
    fn bfs_finds_the_whole_chain() {
        let graph = chain();
        assert_eq!(
            find_path(&graph, "a", "d"),
            Some(vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string()
            ])
        );
    }

    #[test]
    fn no_reverse_edges_means_no_path() {
        let graph = chain();
        assert_eq!(find_path(&graph, "d", "a"), None);
    }

    #[test]
    fn trivial_path_to_self() {
        let graph = chain();
        assert_eq!(find_path(&graph, "a", "a"), Some(vec!["a".to_string()]));
    }

    #[test]
    fn absent_endpoints_yield_none() {
        let graph = chain();
        assert_eq!(find_path(&graph, "a", "ghost"), None);
        assert_eq!(find_path(&graph, "ghost", "a"), None);
    }

    #[test]
    fn bfs_prefers_fewest_edges() {
        let mut graph = chain();
        // Shortcut a -> d in addition to the three-hop chain.
        graph.add_edge("a", "d");
        assert_eq!(
            find_path(&graph, "a", "d"),
            Some(vec!["a".to_string(), "d".to_string()])
        );
    }

    #[test]
    fn cycles_terminate() {
        let mut graph = CallGraph::new();
        graph.add_edge("a", "b");
        graph.add_edge("b", "a");
        assert_eq!(find_path(&graph, "a", "ghost"), None);
        assert_eq!(
            find_path(&graph, "a", "b"),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn alignment_strips_leading_segments() {
        let mut graph = CallGraph::new();
        graph.insert_node("mod__Class__method");

        assert_eq!(
            align_node_name(&graph, "pkg__mod__Class__method"),
            Some("mod__Class__method".to_string())
        );
        assert_eq!(
            align_node_name(&graph, "mod__Class__method"),
            Some("mod__Class__method".to_string())
        );
        assert_eq!(align_node_name(&graph, "other__thing"), None);
    }
}
