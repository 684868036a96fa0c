/// How a function or method name is located inside its definition node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStrategy {
    /// The definition node carries a `name` field (Java, Go, JS, TS, ...).
    NameField,
    /// C-family: unwind the declarator chain down to the identifier.
    Declarator,
}

/// Tree-sitter node kinds that shape one language's AST.
///
/// The extractor and the call-graph builder never mention a concrete
/// language; everything language-specific lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarShape {
    /// Node kinds that define a function or method.
    pub function_types: &'static [&'static str],
    /// Node kinds that define a class-like construct.
    pub class_types: &'static [&'static str],
    /// Node kind of a class body (methods live one level below it).
    pub class_body_type: Option<&'static str>,
    /// Node kind of a function body.
    pub function_body_type: &'static str,
    /// Node kinds that represent a call site.
    pub call_types: &'static [&'static str],
    /// Transparent containers (namespaces, modules) to recurse through.
    pub container_types: &'static [&'static str],
    pub name_strategy: NameStrategy,
    /// Node kind carrying the class name inside a class definition.
    pub class_name_type: Option<&'static str>,
}

/// How symbols are extracted for a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// Dedicated walk over the language's own syntax tree. Reserved for
    /// Python, whose call graph is imported from an external edge list
    /// rather than built by the generic two-pass builder.
    NativeAst,
    /// Generic traversal driven by a [`GrammarShape`].
    Grammar(GrammarShape),
}

/// Immutable description of one supported language.
///
/// Registered once at process start; looked up by file extension.
#[derive(Clone)]
pub struct LanguageDescriptor {
    pub name: &'static str,
    /// Lowercase extensions without the leading dot.
    pub extensions: &'static [&'static str],
    pub strategy: ExtractionStrategy,
    grammar_fn: fn() -> tree_sitter::Language,
}

impl LanguageDescriptor {
    pub fn new(
        name: &'static str,
        extensions: &'static [&'static str],
        strategy: ExtractionStrategy,
        grammar_fn: fn() -> tree_sitter::Language,
    ) -> Self {
        Self {
            name,
            extensions,
            strategy,
            grammar_fn,
        }
    }

    /// Instantiate the tree-sitter grammar for this language.
    pub fn grammar(&self) -> tree_sitter::Language {
        (self.grammar_fn)()
    }

    /// Grammar shape, if this language uses the generic traversal.
    pub fn shape(&self) -> Option<&GrammarShape> {
        match &self.strategy {
            ExtractionStrategy::Grammar(shape) => Some(shape),
            ExtractionStrategy::NativeAst => None,
        }
    }

    pub fn is_grammar_driven(&self) -> bool {
        matches!(self.strategy, ExtractionStrategy::Grammar(_))
    }
}

impl std::fmt::Debug for LanguageDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageDescriptor")
            .field("name", &self.name)
            .field("extensions", &self.extensions)
            .field("strategy", &self.strategy)
            .finish()
    }
}
