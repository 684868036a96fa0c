//! Tree walks shared by the symbol extractor and the call-graph builder.
//!
//! There is exactly one generic traversal; per-language behavior comes from
//! the [`GrammarShape`] table. Python gets its own walk because its symbols
//! follow the native-AST convention (top-level definitions plus one level of
//! class methods) that the external edge-list call graph is aligned with.

use crate::error::{ExtractorError, Result};
use codeintel_languages::{GrammarShape, LanguageDescriptor, NameStrategy};
use tree_sitter::{Node, Parser, Tree};

/// One definition discovered by a walk.
#[derive(Debug)]
pub enum Decl<'tree> {
    Function {
        /// Qualified name, `Class.method` for methods.
        name: String,
        node: Node<'tree>,
        body: Option<Node<'tree>>,
    },
    Class {
        name: String,
        node: Node<'tree>,
    },
}

impl<'tree> Decl<'tree> {
    pub fn name(&self) -> &str {
        match self {
            Decl::Function { name, .. } | Decl::Class { name, .. } => name,
        }
    }

    pub fn node(&self) -> Node<'tree> {
        match self {
            Decl::Function { node, .. } | Decl::Class { node, .. } => *node,
        }
    }
}

/// Parse source text with the descriptor's grammar.
pub fn parse_source(content: &str, descriptor: &LanguageDescriptor) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&descriptor.grammar())
        .map_err(|e| ExtractorError::TreeSitter(e.to_string()))?;
    parser
        .parse(content, None)
        .ok_or_else(|| ExtractorError::Parse(descriptor.name.to_string()))
}

/// Collect every definition under `root`, dispatching on the descriptor's
/// extraction strategy.
pub fn collect_decls<'t>(
    root: Node<'t>,
    src: &[u8],
    descriptor: &LanguageDescriptor,
) -> Vec<Decl<'t>> {
    match descriptor.shape() {
        Some(shape) => {
            let mut out = Vec::new();
            walk_grammar(root, src, shape, None, &mut out);
            out
        }
        None => collect_python_decls(root, src),
    }
}

fn node_text(node: Node<'_>, src: &[u8]) -> String {
    node.utf8_text(src).unwrap_or_default().to_string()
}

/// Join the identifier parts of a `qualified_identifier`, `Ns::m` -> `Ns.m`.
pub fn qualified_identifier_name(node: Node<'_>, src: &[u8]) -> String {
    let mut parts = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "namespace_identifier" | "identifier" | "type_identifier" => {
                parts.push(node_text(child, src));
            }
            _ => {}
        }
    }
    if parts.is_empty() {
        node_text(node, src)
    } else {
        parts.join(".")
    }
}

/// Unwind a C-family declarator chain down to the function name.
///
/// Handles the plain identifier, inline method `field_identifier`, the
/// qualified `Class::method` form, and declarators wrapped in pointer or
/// reference declarators.
fn declarator_name(declarator: Node<'_>, src: &[u8]) -> String {
    let mut cursor = declarator.walk();
    for child in declarator.children(&mut cursor) {
        match child.kind() {
            "identifier" | "field_identifier" => return node_text(child, src),
            "qualified_identifier" => return qualified_identifier_name(child, src),
            "function_declarator" => return declarator_name(child, src),
            _ => {}
        }
    }
    String::new()
}

/// Find the `function_declarator` of a C-family definition, looking through
/// pointer and reference declarator wrappers.
fn find_function_declarator<'t>(node: Node<'t>) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "function_declarator" => return Some(child),
            "pointer_declarator" | "reference_declarator" => {
                if let Some(inner) = find_function_declarator(child) {
                    return Some(inner);
                }
            }
            _ => {}
        }
    }
    None
}

fn name_field(node: Node<'_>, src: &[u8]) -> String {
    node.child_by_field_name("name")
        .map(|n| node_text(n, src))
        .unwrap_or_default()
}

/// Receiver type of a Go method, pointer unwrapped:
/// `func (s *Server) Start()` -> `Server`.
fn go_receiver_type(node: Node<'_>, src: &[u8]) -> String {
    let receiver = node.child_by_field_name("receiver").or_else(|| {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .find(|c| c.kind() == "parameter_list");
        found
    });
    let Some(receiver) = receiver else {
        return String::new();
    };

    let mut cursor = receiver.walk();
    for child in receiver.children(&mut cursor) {
        if child.kind() != "parameter_declaration" {
            continue;
        }
        let Some(ty) = child.child_by_field_name("type") else {
            continue;
        };
        match ty.kind() {
            "pointer_type" => {
                let mut ty_cursor = ty.walk();
                for inner in ty.children(&mut ty_cursor) {
                    if inner.kind() == "type_identifier" {
                        return node_text(inner, src);
                    }
                }
            }
            "type_identifier" => return node_text(ty, src),
            _ => {}
        }
    }
    String::new()
}

fn function_name(node: Node<'_>, src: &[u8], shape: &GrammarShape, class: Option<&str>) -> String {
    let mut name = match shape.name_strategy {
        NameStrategy::NameField => name_field(node, src),
        NameStrategy::Declarator => find_function_declarator(node)
            .map(|d| declarator_name(d, src))
            .unwrap_or_default(),
    };

    // Receiver-based methods resolve their prefix from the receiver type.
    if node.kind() == "method_declaration" && class.is_none() {
        let receiver = go_receiver_type(node, src);
        if !receiver.is_empty() && !name.is_empty() {
            name = format!("{receiver}.{name}");
        }
    } else if let Some(class) = class {
        if !name.is_empty() && !name.contains('.') {
            name = format!("{class}.{name}");
        }
    }
    name
}

fn function_body<'t>(node: Node<'t>, shape: &GrammarShape) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .find(|c| c.kind() == shape.function_body_type);
    found
}

fn walk_grammar<'t>(
    node: Node<'t>,
    src: &[u8],
    shape: &GrammarShape,
    class: Option<&str>,
    out: &mut Vec<Decl<'t>>,
) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        let kind = child.kind();

        if shape.function_types.contains(&kind) {
            let name = function_name(child, src, shape, class);
            if name.is_empty() {
                // Anonymous literals get their name from the enclosing
                // declarator branch below.
                continue;
            }
            out.push(Decl::Function {
                name,
                node: child,
                body: function_body(child, shape),
            });
        } else if shape.class_types.contains(&kind) {
            let class_name = shape
                .class_name_type
                .and_then(|name_kind| {
                    let mut c = child.walk();
                    let found = child.children(&mut c).find(|n| n.kind() == name_kind);
                    found
                })
                .map(|n| node_text(n, src))
                .unwrap_or_default();

            if !class_name.is_empty() {
                out.push(Decl::Class {
                    name: class_name.clone(),
                    node: child,
                });
            }

            if let Some(body_kind) = shape.class_body_type {
                let mut c = child.walk();
                let body = child.children(&mut c).find(|n| n.kind() == body_kind);
                if let Some(body) = body {
                    let ctx = if class_name.is_empty() {
                        class.map(str::to_string)
                    } else {
                        Some(class_name)
                    };
                    walk_grammar(body, src, shape, ctx.as_deref(), out);
                }
            }
        } else if shape.container_types.contains(&kind) {
            // Namespaces and modules are transparent.
            let mut c = child.walk();
            let body = child
                .children(&mut c)
                .find(|n| n.kind() == "declaration_list");
            if let Some(body) = body {
                walk_grammar(body, src, shape, class, out);
            }
        } else if matches!(kind, "lexical_declaration" | "variable_declaration") {
            collect_arrow_functions(child, src, shape, class, out);
        } else if kind == "export_statement" {
            walk_grammar(child, src, shape, class, out);
        }
    }
}

/// Arrow functions assigned to a variable are named after that variable.
fn collect_arrow_functions<'t>(
    declaration: Node<'t>,
    src: &[u8],
    shape: &GrammarShape,
    class: Option<&str>,
    out: &mut Vec<Decl<'t>>,
) {
    let mut cursor = declaration.walk();
    for declarator in declaration.children(&mut cursor) {
        if declarator.kind() != "variable_declarator" {
            continue;
        }
        let Some(value) = declarator.child_by_field_name("value") else {
            continue;
        };
        if value.kind() != "arrow_function" {
            continue;
        }
        let mut name = name_field(declarator, src);
        if name.is_empty() {
            continue;
        }
        if let Some(class) = class {
            name = format!("{class}.{name}");
        }
        out.push(Decl::Function {
            name,
            // Span covers the whole `const f = ...` declaration.
            node: declaration,
            body: function_body(value, shape),
        });
    }
}

/// Unwrap `@decorator`-wrapped definitions to the inner definition.
fn undecorated(node: Node<'_>) -> Node<'_> {
    if node.kind() == "decorated_definition" {
        if let Some(inner) = node.child_by_field_name("definition") {
            return inner;
        }
    }
    node
}

/// Native-AST walk for Python: top-level functions and classes, plus one
/// level of class-body methods named `Class.method`.
fn collect_python_decls<'t>(root: Node<'t>, src: &[u8]) -> Vec<Decl<'t>> {
    let mut out = Vec::new();
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        let def = undecorated(child);
        match def.kind() {
            "function_definition" => {
                let name = name_field(def, src);
                if name.is_empty() {
                    continue;
                }
                out.push(Decl::Function {
                    name,
                    node: def,
                    body: def.child_by_field_name("body"),
                });
            }
            "class_definition" => {
                let class_name = name_field(def, src);
                if class_name.is_empty() {
                    continue;
                }
                out.push(Decl::Class {
                    name: class_name.clone(),
                    node: def,
                });

                let Some(body) = def.child_by_field_name("body") else {
                    continue;
                };
                let mut body_cursor = body.walk();
                for member in body.children(&mut body_cursor) {
                    let method = undecorated(member);
                    if method.kind() != "function_definition" {
                        continue;
                    }
                    let method_name = name_field(method, src);
                    if method_name.is_empty() {
                        continue;
                    }
                    out.push(Decl::Function {
                        name: format!("{class_name}.{method_name}"),
                        node: method,
                        body: method.child_by_field_name("body"),
                    });
                }
            }
            _ => {}
        }
    }
    out
}
