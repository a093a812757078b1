//! Per-parse configuration: language resolution and syntax-error policy.
//!
//! We use the built-in `SupportLang` from ast-grep-language as the language
//! authority instead of maintaining our own grammar registry. It resolves
//! the usual tag spellings ("python", "py", "javascript", "js", ...) and
//! hands out the matching tree-sitter grammar.

use std::fmt;
use std::str::FromStr;

use ast_grep_language::SupportLang;

use crate::errors::AstError;

/// Language tag reserved for auto-detection, which is not implemented.
const GUESS: &str = "guess";

/// Reaction to syntax errors found in the parsed tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyntaxErrorPolicy {
    /// Fail on the first ERROR node encountered.
    #[default]
    Raise,
    /// Log a warning per ERROR node and keep going.
    Warn,
    /// Skip validation entirely. Useful for incomplete snippets.
    Ignore,
}

impl FromStr for SyntaxErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raise" => Ok(SyntaxErrorPolicy::Raise),
            "warn" => Ok(SyntaxErrorPolicy::Warn),
            "ignore" => Ok(SyntaxErrorPolicy::Ignore),
            other => Err(format!(
                "unknown syntax error policy `{other}` (expected raise, warn or ignore)"
            )),
        }
    }
}

impl fmt::Display for SyntaxErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorPolicy::Raise => write!(f, "raise"),
            SyntaxErrorPolicy::Warn => write!(f, "warn"),
            SyntaxErrorPolicy::Ignore => write!(f, "ignore"),
        }
    }
}

/// Immutable configuration for a single parse call.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub lang: SupportLang,
    pub syntax_error: SyntaxErrorPolicy,
}

impl ParserConfig {
    /// Resolve a language tag into a configuration with the default policy.
    ///
    /// The tag `"guess"` is rejected: automatic language detection is not
    /// supported, callers must name the language explicitly.
    pub fn new(lang: &str) -> Result<Self, AstError> {
        if lang == GUESS {
            return Err(AstError::LanguageDetection);
        }

        let lang = SupportLang::from_str(lang).map_err(|_| AstError::UnsupportedLanguage {
            lang: lang.to_string(),
        })?;

        Ok(Self {
            lang,
            syntax_error: SyntaxErrorPolicy::default(),
        })
    }

    /// Override the syntax-error policy.
    #[must_use]
    pub fn with_syntax_error_policy(mut self, policy: SyntaxErrorPolicy) -> Self {
        self.syntax_error = policy;
        self
    }
}
