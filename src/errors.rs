use thiserror::Error;

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, AstError>;

#[derive(Error, Debug)]
pub enum AstError {
    #[error("the code string is empty, nothing to parse")]
    EmptyInput,

    #[error(
        "guessing the language automatically is not implemented; \
         specify a language with the `lang` argument"
    )]
    LanguageDetection,

    #[error("no parser available for language `{lang}`")]
    UnsupportedLanguage { lang: String },

    #[error("failed to load the `{lang}` grammar into the parser")]
    ParserInit { lang: String },

    #[error("failed to parse source code")]
    ParseFailed,

    /// Syntax error detected while validating the tree. Carries the
    /// positional clause built from the offending node's span.
    #[error("syntax error {0}")]
    Syntax(String),
}
