use crate::descriptor::{ExtractionStrategy, GrammarShape, LanguageDescriptor, NameStrategy};

/// Descriptors for every language supported out of the box.
///
/// Python is the privileged native-AST language: its symbols come from a
/// dedicated walk and its call graph from an externally generated edge list.
/// Everything else is fully described by its [`GrammarShape`].
pub(crate) fn builtin_descriptors() -> Vec<LanguageDescriptor> {
    vec![
        LanguageDescriptor::new(
            "python",
            &["py", "pyw"],
            ExtractionStrategy::NativeAst,
            || tree_sitter_python::LANGUAGE.into(),
        ),
        LanguageDescriptor::new(
            "c",
            &["c", "h"],
            ExtractionStrategy::Grammar(GrammarShape {
                function_types: &["function_definition"],
                class_types: &["struct_specifier"],
                class_body_type: Some("field_declaration_list"),
                function_body_type: "compound_statement",
                call_types: &["call_expression"],
                container_types: &[],
                name_strategy: NameStrategy::Declarator,
                class_name_type: Some("type_identifier"),
            }),
            || tree_sitter_c::LANGUAGE.into(),
        ),
        LanguageDescriptor::new(
            "cpp",
            &["cpp", "cc", "cxx", "hpp", "hxx", "hh"],
            ExtractionStrategy::Grammar(GrammarShape {
                function_types: &["function_definition"],
                class_types: &["class_specifier", "struct_specifier"],
                class_body_type: Some("field_declaration_list"),
                function_body_type: "compound_statement",
                call_types: &["call_expression"],
                container_types: &["namespace_definition"],
                name_strategy: NameStrategy::Declarator,
                class_name_type: Some("type_identifier"),
            }),
            || tree_sitter_cpp::LANGUAGE.into(),
        ),
        LanguageDescriptor::new(
            "java",
            &["java"],
            ExtractionStrategy::Grammar(GrammarShape {
                function_types: &["method_declaration", "constructor_declaration"],
                class_types: &[
                    "class_declaration",
                    "interface_declaration",
                    "enum_declaration",
                ],
                class_body_type: Some("class_body"),
                function_body_type: "block",
                call_types: &["method_invocation"],
                container_types: &[],
                name_strategy: NameStrategy::NameField,
                class_name_type: Some("identifier"),
            }),
            || tree_sitter_java::LANGUAGE.into(),
        ),
        LanguageDescriptor::new(
            "go",
            &["go"],
            ExtractionStrategy::Grammar(GrammarShape {
                function_types: &["function_declaration", "method_declaration"],
                class_types: &[],
                class_body_type: None,
                function_body_type: "block",
                call_types: &["call_expression"],
                container_types: &[],
                name_strategy: NameStrategy::NameField,
                class_name_type: None,
            }),
            || tree_sitter_go::LANGUAGE.into(),
        ),
        LanguageDescriptor::new(
            "javascript",
            &["js", "jsx", "mjs", "cjs"],
            ExtractionStrategy::Grammar(GrammarShape {
                function_types: &[
                    "function_declaration",
                    "method_definition",
                    "arrow_function",
                ],
                class_types: &["class_declaration"],
                class_body_type: Some("class_body"),
                function_body_type: "statement_block",
                call_types: &["call_expression"],
                container_types: &[],
                name_strategy: NameStrategy::NameField,
                class_name_type: Some("identifier"),
            }),
            || tree_sitter_javascript::LANGUAGE.into(),
        ),
        LanguageDescriptor::new(
            "typescript",
            &["ts", "tsx"],
            ExtractionStrategy::Grammar(GrammarShape {
                function_types: &[
                    "function_declaration",
                    "method_definition",
                    "arrow_function",
                ],
                class_types: &["class_declaration"],
                class_body_type: Some("class_body"),
                function_body_type: "statement_block",
                call_types: &["call_expression"],
                container_types: &[],
                name_strategy: NameStrategy::NameField,
                class_name_type: Some("type_identifier"),
            }),
            || tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        ),
        LanguageDescriptor::new(
            "csharp",
            &["cs"],
            ExtractionStrategy::Grammar(GrammarShape {
                function_types: &[
                    "method_declaration",
                    "constructor_declaration",
                    "local_function_statement",
                ],
                class_types: &[
                    "class_declaration",
                    "interface_declaration",
                    "struct_declaration",
                ],
                class_body_type: Some("declaration_list"),
                function_body_type: "block",
                call_types: &["invocation_expression"],
                container_types: &["namespace_declaration"],
                name_strategy: NameStrategy::NameField,
                class_name_type: Some("identifier"),
            }),
            || tree_sitter_c_sharp::LANGUAGE.into(),
        ),
        LanguageDescriptor::new(
            "rust",
            &["rs"],
            ExtractionStrategy::Grammar(GrammarShape {
                function_types: &["function_item"],
                class_types: &[],
                class_body_type: None,
                function_body_type: "block",
                // impl and mod bodies are both declaration lists; methods
                // surface under their bare names, matching the short-name
                // resolution bias.
                call_types: &["call_expression"],
                container_types: &["mod_item", "impl_item"],
                name_strategy: NameStrategy::NameField,
                class_name_type: None,
            }),
            || tree_sitter_rust::LANGUAGE.into(),
        ),
    ]
}
