use crate::error::{GraphError, Result};
use crate::types::{node_id, CallGraph};
use codeintel_extractor::walker::{self, Decl};
use codeintel_languages::{GrammarShape, LanguageDescriptor};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use tree_sitter::{Node, Tree};

/// Two-pass call-graph builder for one grammar-driven language.
///
/// Pass 1 collects every function with its body span and short name and
/// builds the short-name index across all files of the language. Pass 2
/// resolves call sites against that index, so it cannot start for any file
/// before pass 1 has finished for all of them. A call site only carries
/// the short identifier used at the call, never the defining file.
pub struct CallGraphBuilder<'d> {
    descriptor: &'d LanguageDescriptor,
    shape: &'d GrammarShape,
}

struct ParsedFile {
    stem: String,
    content: String,
    tree: Tree,
}

struct FnEntry<'t> {
    id: String,
    short: String,
    body: Option<Node<'t>>,
    file: usize,
}

fn file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_string()
}

impl<'d> CallGraphBuilder<'d> {
    pub fn new(descriptor: &'d LanguageDescriptor) -> Result<Self> {
        let shape = descriptor
            .shape()
            .ok_or_else(|| GraphError::NotGrammarDriven(descriptor.name.to_string()))?;
        Ok(Self { descriptor, shape })
    }

    /// Build the adjacency map for every file of this language.
    ///
    /// Every pass-1 symbol becomes a node, including symbols with no calls
    /// in or out. A file that fails to parse is logged and skipped without
    /// aborting the batch.
    pub fn build(&self, files: &[(String, String)]) -> CallGraph {
        // Per-file parsing shares no mutable state.
        let parsed: Vec<ParsedFile> = files
            .par_iter()
            .filter_map(|(path, content)| match walker::parse_source(content, self.descriptor) {
                Ok(tree) => Some(ParsedFile {
                    stem: file_stem(path),
                    content: content.clone(),
                    tree,
                }),
                Err(e) => {
                    log::warn!("Could not parse {path} for call graph: {e}");
                    None
                }
            })
            .collect();

        // Pass 1: symbols, bodies, short-name index.
        let mut functions: Vec<FnEntry<'_>> = Vec::new();
        for (idx, file) in parsed.iter().enumerate() {
            let src = file.content.as_bytes();
            for decl in walker::collect_decls(file.tree.root_node(), src, self.descriptor) {
                if let Decl::Function { name, body, .. } = decl {
                    functions.push(FnEntry {
                        id: node_id(&file.stem, &name),
                        short: name,
                        body,
                        file: idx,
                    });
                }
            }
        }

        let mut graph = CallGraph::new();
        let mut short_index: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for entry in &functions {
            graph.insert_node(entry.id.clone());
            short_index
                .entry(entry.short.clone())
                .or_default()
                .push(entry.id.clone());
        }

        // Pass 2: edge discovery against the completed index.
        for entry in &functions {
            let Some(body) = entry.body else {
                continue;
            };
            let src = parsed[entry.file].content.as_bytes();
            let mut resolved = Vec::new();
            collect_calls(body, src, self.shape, &short_index, &mut resolved);

            for short in resolved {
                if let Some(callee_ids) = short_index.get(&short) {
                    for callee in callee_ids {
                        graph.add_edge(&entry.id, callee);
                    }
                }
            }
        }

        log::info!(
            "Built {} call graph: {} nodes, {} edges",
            self.descriptor.name,
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }
}

/// Recursively find call sites and resolve each to a known short name.
///
/// Exact short-name match wins; otherwise a known `Something.<name>` is
/// accepted, which links a bare in-class `method()` call to
/// `Class.method`. Unresolved callees are simply omitted.
fn collect_calls(
    node: Node<'_>,
    src: &[u8],
    shape: &GrammarShape,
    index: &BTreeMap<String, Vec<String>>,
    out: &mut Vec<String>,
) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if shape.call_types.contains(&child.kind()) {
            if let Some(name) = resolve_callee(child, src) {
                if index.contains_key(&name) {
                    out.push(name);
                } else {
                    let suffix = format!(".{name}");
                    if let Some(known) = index.keys().find(|k| k.ends_with(&suffix)) {
                        out.push(known.clone());
                    }
                }
            }
        }
        // Nested calls live inside argument lists and lambda bodies.
        collect_calls(child, src, shape, index, out);
    }
}

fn node_text(node: Node<'_>, src: &[u8]) -> Option<String> {
    let text = node.utf8_text(src).ok()?;
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn field_text(node: Node<'_>, field: &str, src: &[u8]) -> Option<String> {
    node.child_by_field_name(field).and_then(|n| node_text(n, src))
}

/// Resolve the callee identifier of one call site.
fn resolve_callee(call: Node<'_>, src: &[u8]) -> Option<String> {
    // Java-style invocations expose the method name as a declared field.
    if call.kind() == "method_invocation" {
        return field_text(call, "name", src);
    }

    let callee = call.child(0)?;
    match callee.kind() {
        "identifier" => node_text(callee, src),
        "qualified_identifier" => Some(walker::qualified_identifier_name(callee, src)),
        // obj.method() / obj->method(): member name only, an intentional
        // over-approximation.
        "field_expression" | "member_expression" => field_text(callee, "field", src)
            .or_else(|| field_text(callee, "property", src)),
        // Go pkg.Func(): the trailing field is the function name.
        "selector_expression" => field_text(callee, "field", src),
        // C# obj.Method(): trailing name.
        "member_access_expression" => field_text(callee, "name", src),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeintel_languages::registry;
    use pretty_assertions::assert_eq;

    fn build(language: &str, files: &[(&str, &str)]) -> CallGraph {
        let descriptor = registry().get(language).unwrap();
        let files: Vec<(String, String)> = files
            .iter()
            .map(|(p, c)| (p.to_string(), c.to_string()))
            .collect();
        CallGraphBuilder::new(descriptor).unwrap().build(&files)
    }

    #[test]
    fn c_call_produces_edge_and_keeps_leaf_node() {
        let graph = build(
            "c",
            &[(
                "math.c",
                "int add(int a, int b) { return a + b; }\nint main() { return add(1, 2); }\n",
            )],
        );

        assert!(graph.contains("math__add"));
        assert!(graph.contains("math__main"));
        assert_eq!(graph.callees("math__main"), &["math__add".to_string()]);
        assert_eq!(graph.callees("math__add").len(), 0);
    }

    #[test]
    fn unused_helper_is_still_a_node() {
        let graph = build("c", &[("util.c", "static void unused_helper() {}\n")]);
        assert!(graph.contains("util__unused_helper"));
        assert_eq!(graph.callees("util__unused_helper").len(), 0);
    }

    #[test]
    fn edges_cross_files_within_one_language() {
        let graph = build(
            "c",
            &[
                ("a.c", "void helper() {}\n"),
                ("b.c", "void helper();\nint main() { helper(); return 0; }\n"),
            ],
        );
        assert_eq!(graph.callees("b__main"), &["a__helper".to_string()]);
    }

    #[test]
    fn cpp_qualified_call_resolves_exactly() {
        let graph = build(
            "cpp",
            &[(
                "svc.cpp",
                r#"
class Service {
public:
    void start() {}
};

void Service::stop() {}

void boot() {
    Service s;
    s.start();
    Service::stop();
}
"#,
            )],
        );

        let mut callees = graph.callees("svc__boot").to_vec();
        callees.sort();
        assert_eq!(
            callees,
            vec![
                "svc__Service__start".to_string(),
                "svc__Service__stop".to_string()
            ]
        );
    }

    #[test]
    fn bare_in_class_call_links_by_suffix() {
        let graph = build(
            "java",
            &[(
                "Account.java",
                r#"
public class Account {
    public void deposit(int amount) {
        validate(amount);
    }

    private void validate(int amount) {}
}
"#,
            )],
        );
        assert_eq!(
            graph.callees("Account__Account__deposit"),
            &["Account__Account__validate".to_string()]
        );
    }

    #[test]
    fn go_selector_calls_resolve_by_member_name() {
        let graph = build(
            "go",
            &[
                (
                    "server.go",
                    "package main\n\nfunc (s *Server) Start() {\n\thelpers.Warm()\n}\n",
                ),
                ("warm.go", "package helpers\n\nfunc Warm() {}\n"),
            ],
        );
        assert_eq!(
            graph.callees("server__Server__Start"),
            &["warm__Warm".to_string()]
        );
    }

    #[test]
    fn self_recursion_is_not_an_edge() {
        let graph = build("c", &[("loop.c", "void spin() { spin(); }\n")]);
        assert!(graph.contains("loop__spin"));
        assert_eq!(graph.callees("loop__spin").len(), 0);
    }

    #[test]
    fn unresolved_callees_are_omitted() {
        let graph = build("c", &[("ext.c", "int main() { return printf(\"x\"); }\n")]);
        assert_eq!(graph.callees("ext__main").len(), 0);
    }

    #[test]
    fn non_grammar_language_is_rejected() {
        let python = registry().get("python").unwrap();
        assert!(CallGraphBuilder::new(python).is_err());
    }
}
