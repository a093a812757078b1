//! Tree-sitter parser wrapper.
//!
//! [`AstParser`] owns one `tree_sitter::Parser` configured for a single
//! language. Parsing normalizes line endings to LF and returns the
//! normalized copy alongside the tree, so node spans always index the
//! exact text the tree was built from.

use ast_grep_language::{LanguageExt, SupportLang};
use tree_sitter::{Parser, Tree};

use crate::errors::AstError;

/// Tree-sitter parser for a fixed language.
pub struct AstParser {
    parser: Parser,
    lang: SupportLang,
}

impl AstParser {
    /// Create a parser for the given language.
    pub fn new(lang: SupportLang) -> Result<Self, AstError> {
        let mut parser = Parser::new();
        let ts_lang = lang.get_ts_language();
        parser
            .set_language(&ts_lang)
            .map_err(|_| AstError::ParserInit {
                lang: lang.to_string(),
            })?;

        Ok(Self { parser, lang })
    }

    /// Get the configured language.
    pub fn lang(&self) -> SupportLang {
        self.lang
    }

    /// Parse source code into a tree plus the normalized source it spans.
    pub fn parse(&mut self, source: &str) -> Result<(Tree, String), AstError> {
        let code = normalize_line_endings(source);
        let tree = self
            .parser
            .parse(code.as_str(), None)
            .ok_or(AstError::ParseFailed)?;
        Ok((tree, code))
    }
}

/// Convert CRLF and lone CR line endings to LF.
fn normalize_line_endings(source: &str) -> String {
    if !source.contains('\r') {
        return source.to_string();
    }
    source.replace("\r\n", "\n").replace('\r', "\n")
}
