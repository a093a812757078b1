//! Flattening a syntax tree into semantic components.
//!
//! A component is a subtree that stands on its own when reading a source
//! file: a statement, a definition, a comment, or a string/doc literal.
//! [`extract_components`] reduces a tree to the ordered list of such
//! subtrees, skipping single-child wrapper nodes and never decomposing a
//! component further once classified.

use crate::node::AstNode;

/// Node kinds that are always atomic components.
pub const META_TYPES: [&str; 5] = [
    "string",
    "docstring",
    "comment",
    "class_definition",
    "function_definition",
];

/// Structural rule: any kind with this suffix is a statement, hence atomic.
const STATEMENT_SUFFIX: &str = "_statement";

fn is_meta(kind: &str) -> bool {
    META_TYPES.contains(&kind)
}

fn is_statement(kind: &str) -> bool {
    kind.ends_with(STATEMENT_SUFFIX)
}

/// Flatten the subtree under `node` into its semantic components, in source
/// order.
///
/// Single-child wrapper chains are collapsed first (a module wrapping one
/// statement carries no content of its own). The collapsed node is atomic if
/// its kind is in [`META_TYPES`] or ends in `_statement`; otherwise each
/// child is either taken as-is (leaves and meta kinds) or decomposed
/// recursively. Text between components (punctuation, whitespace) is not
/// covered by the result.
///
/// The returned spans are disjoint and non-decreasing. A childless node that
/// classifies as neither meta nor statement yields an empty vector.
pub fn extract_components<'a>(node: &AstNode<'a>) -> Vec<AstNode<'a>> {
    let mut root = *node;
    while root.child_count() == 1 {
        match root.child(0) {
            Some(only) => root = only,
            None => break,
        }
    }

    if is_meta(root.kind()) || is_statement(root.kind()) {
        return vec![root];
    }

    // The per-child rule keys on the parent's kind, fixed for the whole loop.
    let root_is_statement = is_statement(root.kind());

    let mut components = Vec::new();
    for child in root.children() {
        if child.is_leaf() || is_meta(child.kind()) || root_is_statement {
            components.push(child);
        } else {
            components.extend(extract_components(&child));
        }
    }
    components
}
