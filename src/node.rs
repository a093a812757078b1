//! Read-only view over a single syntax-tree node.
//!
//! [`AstNode`] pairs a `tree_sitter::Node` with the normalized source text
//! its tree was built from, so the literal text of any subtree is one slice
//! away. Nodes are cheap to copy and borrow from the owning tree; callers
//! never construct them directly.

use std::ops::Range;

use tree_sitter::Point;

/// The kind a parser assigns to a subtree it could not match against any
/// grammar rule.
pub const ERROR_KIND: &str = "ERROR";

/// A node of a parsed syntax tree together with the source it spans.
#[derive(Debug, Clone, Copy)]
pub struct AstNode<'a> {
    node: tree_sitter::Node<'a>,
    source: &'a str,
}

impl<'a> AstNode<'a> {
    pub(crate) fn new(node: tree_sitter::Node<'a>, source: &'a str) -> Self {
        Self { node, source }
    }

    /// Grammar-defined tag of this node (e.g. `"function_definition"`).
    pub fn kind(&self) -> &'a str {
        self.node.kind()
    }

    /// True if the parser tagged this node with the error sentinel kind.
    pub fn is_error(&self) -> bool {
        self.kind() == ERROR_KIND
    }

    /// Start of the node's span (zero-based row/column).
    pub fn start_position(&self) -> Point {
        self.node.start_position()
    }

    /// End of the node's span (zero-based row/column).
    pub fn end_position(&self) -> Point {
        self.node.end_position()
    }

    /// Byte range of the node within the source.
    pub fn byte_range(&self) -> Range<usize> {
        self.node.byte_range()
    }

    pub fn child_count(&self) -> usize {
        self.node.child_count()
    }

    pub fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }

    /// The i-th child, counting named and anonymous children alike.
    pub fn child(&self, i: usize) -> Option<AstNode<'a>> {
        self.node.child(i).map(|node| Self::new(node, self.source))
    }

    /// Ordered children, named and anonymous alike.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = AstNode<'a>> + '_ {
        (0..self.child_count()).filter_map(move |i| self.child(i))
    }

    /// Literal source text this node spans.
    pub fn text(&self) -> &'a str {
        &self.source[self.node.byte_range()]
    }

    /// S-expression rendering of the subtree, for diagnostics.
    pub fn to_sexp(&self) -> String {
        self.node.to_sexp()
    }

    /// Access the underlying tree-sitter node.
    pub fn inner(&self) -> tree_sitter::Node<'a> {
        self.node
    }
}
