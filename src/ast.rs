//! Validated AST wrapper.

use std::fmt;

use ast_grep_language::SupportLang;
use tree_sitter::Tree;

use crate::components::extract_components;
use crate::config::ParserConfig;
use crate::node::AstNode;

/// A parsed, policy-validated syntax tree with its configuration and the
/// normalized source text the tree spans.
///
/// Constructed by [`parse_ast`](crate::parse_ast) after validation; immutable
/// afterwards. Each instance wraps exactly one tree.
#[derive(Debug)]
pub struct SourceCodeAst {
    config: ParserConfig,
    tree: Tree,
    source: String,
}

impl SourceCodeAst {
    pub(crate) fn new(config: ParserConfig, tree: Tree, source: String) -> Self {
        Self {
            config,
            tree,
            source,
        }
    }

    /// Root node of the tree.
    pub fn root(&self) -> AstNode<'_> {
        AstNode::new(self.tree.root_node(), &self.source)
    }

    /// Language the source was parsed as.
    pub fn language(&self) -> SupportLang {
        self.config.lang
    }

    /// The normalized source text node spans refer to.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Flatten the tree into its semantic components.
    pub fn components(&self) -> Vec<AstNode<'_>> {
        extract_components(&self.root())
    }
}

impl fmt::Display for SourceCodeAst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ast: {}", self.config.lang, self.root().to_sexp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::AstParser;

    fn build(source: &str) -> SourceCodeAst {
        let config = ParserConfig::new("python").unwrap();
        let mut parser = AstParser::new(config.lang).unwrap();
        let (tree, code) = parser.parse(source).unwrap();
        SourceCodeAst::new(config, tree, code)
    }

    #[test]
    fn wrapper_exposes_root_and_source() {
        let ast = build("x = 1\n");
        assert_eq!(ast.root().kind(), "module");
        assert_eq!(ast.source(), "x = 1\n");
        assert_eq!(ast.language(), SupportLang::Python);
        assert_eq!(ast.root().byte_range(), 0..ast.source().len());
    }

    #[test]
    fn display_names_language_and_tree() {
        let rendered = build("x = 1\n").to_string();
        assert!(rendered.starts_with("Python ast: "));
        assert!(rendered.contains("(module"));
    }

    #[test]
    fn components_convenience_matches_free_function() {
        let ast = build("import os\n\ndef f():\n    pass\n");
        let via_wrapper: Vec<_> = ast.components().iter().map(|c| c.byte_range()).collect();
        let via_root: Vec<_> = extract_components(&ast.root())
            .iter()
            .map(|c| c.byte_range())
            .collect();
        assert_eq!(via_wrapper, via_root);
    }
}
