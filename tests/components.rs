//! Component extraction over real parsed sources, including order and
//! idempotence properties.

use code_ast::{extract_components, parse_ast, META_TYPES};
use proptest::prelude::*;

#[test]
fn python_module_decomposes_into_statements_and_definitions() {
    let source = "\
import torch
import numpy as np


def my_func():
    print(\"Hello World\")

class GraphAlgos:

    @staticmethod
    def topo_sort(graph):
        return list(topological_sort(graph))
";
    let ast = parse_ast(source, "python").unwrap();
    let components = ast.components();

    let kinds: Vec<&str> = components.iter().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            "import_statement",
            "import_statement",
            "function_definition",
            "class_definition"
        ]
    );

    // Components carry their literal source text.
    assert_eq!(components[0].text(), "import torch");
    assert!(components[2].text().starts_with("def my_func"));
}

#[test]
fn meta_kinds_are_atomic() {
    let source = "\
def f():
    pass

class C:
    pass
";
    let ast = parse_ast(source, "python").unwrap();
    for component in ast.components() {
        if META_TYPES.contains(&component.kind()) {
            let inner = extract_components(&component);
            assert_eq!(inner.len(), 1);
            assert_eq!(inner[0].byte_range(), component.byte_range());
        }
    }
}

#[test]
fn function_internal_comment_is_not_extracted() {
    let source = "\
def my_func():
    # implementation note
    return 1
";
    let ast = parse_ast(source, "python").unwrap();
    let components = ast.components();

    assert_eq!(components.len(), 1);
    assert_eq!(components[0].kind(), "function_definition");
    assert!(components[0].text().contains("# implementation note"));
}

#[test]
fn single_js_statement_is_one_component() {
    let ast = parse_ast("x = 1;", "javascript").unwrap();
    let components = ast.components();

    assert_eq!(components.len(), 1);
    assert_eq!(components[0].kind(), "expression_statement");
    assert_eq!(components[0].text(), "x = 1;");
}

#[test]
fn extraction_works_on_non_root_nodes() {
    let source = "\
class C:
    def m(self):
        pass

    def n(self):
        pass
";
    let ast = parse_ast(source, "python").unwrap();
    let class_def = ast.root().child(0).unwrap();
    assert_eq!(class_def.kind(), "class_definition");

    // The class is atomic from the top, but its body can be decomposed
    // explicitly by starting extraction below the definition.
    let body = class_def
        .children()
        .find(|c| c.kind() == "block")
        .expect("class body");
    let methods = extract_components(&body);
    let kinds: Vec<&str> = methods.iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, vec!["function_definition", "function_definition"]);
}

/// Statement fragments that parse cleanly on their own and joined.
fn statement_pool() -> Vec<&'static str> {
    vec![
        "import os",
        "from sys import path",
        "x = 1",
        "print(\"hi\")",
        "# a note",
        "def f():\n    pass",
        "class C:\n    pass",
        "if x:\n    pass",
        "return_value = compute(1, 2)",
    ]
}

proptest! {
    #[test]
    fn extraction_is_idempotent_and_ordered(
        picks in proptest::collection::vec(0..9usize, 1..12)
    ) {
        let pool = statement_pool();
        let source: String = picks
            .iter()
            .map(|&i| pool[i])
            .collect::<Vec<_>>()
            .join("\n");

        let ast = parse_ast(&source, "python").unwrap();

        let first: Vec<_> = ast.components().iter().map(|c| c.byte_range()).collect();
        let second: Vec<_> = ast.components().iter().map(|c| c.byte_range()).collect();
        // Pure function: same input, same output.
        prop_assert_eq!(&first, &second);

        // Spans are disjoint and in non-decreasing source order.
        for pair in first.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }

        // Every span indexes valid source text.
        for range in &first {
            prop_assert!(range.end <= source.len());
        }
    }
}
