//! Code AST: source code to validated syntax trees and semantic components
//!
//! A thin post-processing layer over tree-sitter: parse source text in any
//! supported language, validate the tree against a syntax-error policy, and
//! flatten it into the statements, definitions, comments and string literals
//! that make up the file.
//!
//! # Example
//!
//! ```no_run
//! use code_ast::parse_ast;
//!
//! # fn main() -> Result<(), code_ast::AstError> {
//! let ast = parse_ast("def f():\n    return 1\n", "python")?;
//! for component in ast.components() {
//!     println!("{}: {}", component.kind(), component.text());
//! }
//! # Ok(())
//! # }
//! ```

use tracing::debug;

pub mod ast;
pub mod components;
pub mod config;
pub mod errors;
pub mod node;
pub mod parser;
pub mod pool;
pub mod visitor;

// Re-exports
pub use ast::SourceCodeAst;
pub use components::{extract_components, META_TYPES};
pub use config::{ParserConfig, SyntaxErrorPolicy};
pub use errors::{AstError, Result};
pub use node::{AstNode, ERROR_KIND};
pub use parser::AstParser;
pub use visitor::{check_tree_for_errors, position_message, ErrorVisitor, Visitor};

/// Parse source code into a validated AST with the default policy
/// (fail on the first syntax error).
///
/// Fails with [`AstError::EmptyInput`] when the source is blank, and with
/// [`AstError::LanguageDetection`] when `lang` is `"guess"`; auto-detection
/// is not supported.
pub fn parse_ast(source_code: &str, lang: &str) -> Result<SourceCodeAst> {
    parse_ast_with_policy(source_code, lang, SyntaxErrorPolicy::default())
}

/// Parse source code into a validated AST, reacting to syntax errors
/// according to `policy`.
pub fn parse_ast_with_policy(
    source_code: &str,
    lang: &str,
    policy: SyntaxErrorPolicy,
) -> Result<SourceCodeAst> {
    if source_code.trim().is_empty() {
        return Err(AstError::EmptyInput);
    }

    let config = ParserConfig::new(lang)?.with_syntax_error_policy(policy);

    debug!("parsing source code with parser for {}", config.lang);

    let (tree, code) = pool::with_parser(config.lang, |parser| parser.parse(source_code))??;

    {
        let root = AstNode::new(tree.root_node(), &code);
        check_tree_for_errors(&root, config.syntax_error)?;
    }

    Ok(SourceCodeAst::new(config, tree, code))
}
