//! Thread-local parser pooling.
//!
//! Tree-sitter parsers are cheap to reuse but not to create (grammar
//! loading). Each thread keeps one parser per language and reuses it for
//! subsequent parse calls.

use std::cell::RefCell;
use std::collections::HashMap;

use ast_grep_language::SupportLang;

use crate::errors::AstError;
use crate::parser::AstParser;

thread_local! {
    static PARSERS: RefCell<HashMap<SupportLang, AstParser>> = RefCell::new(HashMap::new());
}

/// Execute a function with a pooled parser for the given language.
///
/// On first call per thread and language, creates the parser. Subsequent
/// calls reuse the same instance.
pub fn with_parser<F, R>(lang: SupportLang, f: F) -> Result<R, AstError>
where
    F: FnOnce(&mut AstParser) -> R,
{
    PARSERS.with(|cell| {
        let mut pool = cell.borrow_mut();
        if !pool.contains_key(&lang) {
            pool.insert(lang, AstParser::new(lang)?);
        }
        Ok(f(pool
            .get_mut(&lang)
            .expect("parser was just inserted above")))
    })
}
