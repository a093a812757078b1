//! Depth-first tree traversal and syntax-error policy enforcement.
//!
//! [`Visitor`] is a generic pre-order walk dispatching on node kind, with a
//! catch-all default handler so the trait stays open to grammar extension.
//! [`ErrorVisitor`] is the one specialization this crate needs: it reacts to
//! ERROR-tagged nodes according to a [`SyntaxErrorPolicy`].

use tracing::warn;

use crate::config::SyntaxErrorPolicy;
use crate::errors::AstError;
use crate::node::{AstNode, ERROR_KIND};

/// Depth-first pre-order visitor over a syntax tree.
///
/// `visit_node` dispatches on the node kind; unrecognized kinds fall through
/// to `visit_default`, a no-op. Handlers return `Err` to abort the walk.
pub trait Visitor {
    fn visit_node(&mut self, node: &AstNode<'_>) -> Result<(), AstError> {
        match node.kind() {
            ERROR_KIND => self.visit_error(node),
            _ => self.visit_default(node),
        }
    }

    fn visit_error(&mut self, node: &AstNode<'_>) -> Result<(), AstError> {
        self.visit_default(node)
    }

    fn visit_default(&mut self, _node: &AstNode<'_>) -> Result<(), AstError> {
        Ok(())
    }

    /// Walk the subtree under `root`, visiting every node exactly once,
    /// parents before children, children left to right. Stops at the first
    /// handler error.
    fn walk(&mut self, root: &AstNode<'_>) -> Result<(), AstError> {
        let mut stack = vec![*root];
        while let Some(node) = stack.pop() {
            self.visit_node(&node)?;
            // Reversed push so the leftmost child is visited first.
            for child in node.children().rev() {
                stack.push(child);
            }
        }
        Ok(())
    }
}

/// Visitor reacting to ERROR nodes according to a policy.
pub struct ErrorVisitor {
    policy: SyntaxErrorPolicy,
    warnings: usize,
}

impl ErrorVisitor {
    pub fn new(policy: SyntaxErrorPolicy) -> Self {
        Self {
            policy,
            warnings: 0,
        }
    }

    /// Number of warnings emitted so far (only grows under `Warn`).
    pub fn warning_count(&self) -> usize {
        self.warnings
    }
}

impl Visitor for ErrorVisitor {
    fn visit_error(&mut self, node: &AstNode<'_>) -> Result<(), AstError> {
        match self.policy {
            SyntaxErrorPolicy::Raise => Err(AstError::Syntax(position_message(node))),
            SyntaxErrorPolicy::Warn => {
                warn!("syntax error {}", position_message(node));
                self.warnings += 1;
                Ok(())
            }
            SyntaxErrorPolicy::Ignore => Ok(()),
        }
    }
}

/// Validate a tree against a syntax-error policy.
///
/// `Ignore` returns immediately without traversal. `Raise` fails on the
/// first ERROR node in pre-order; `Warn` logs one warning per ERROR node
/// and succeeds.
pub fn check_tree_for_errors(root: &AstNode<'_>, policy: SyntaxErrorPolicy) -> Result<(), AstError> {
    if policy == SyntaxErrorPolicy::Ignore {
        return Ok(());
    }
    ErrorVisitor::new(policy).walk(root)
}

/// Human-readable position of a node, for error messages.
///
/// Same-line nodes render as `in line L [pos. S - E]`, multi-line nodes as
/// `inbetween line L1 (start: S) to line L2 (end: E)`.
pub fn position_message(node: &AstNode<'_>) -> String {
    let start = node.start_position();
    let end = node.end_position();

    if start.row == end.row {
        format!(
            "in line {} [pos. {} - {}]",
            start.row, start.column, end.column
        )
    } else {
        format!(
            "inbetween line {} (start: {}) to line {} (end: {})",
            start.row, start.column, end.row, end.column
        )
    }
}
