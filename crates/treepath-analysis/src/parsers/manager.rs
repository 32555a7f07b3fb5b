//! Parses source text with one cached tree-sitter parser per language per thread.

use std::cell::RefCell;
use std::collections::hash_map::Entry;

use tree_sitter::{Parser, Tree};
use treepath_core::errors::ParseError;
use treepath_core::types::collections::FxHashMap;

use super::Language;

thread_local! {
    static PARSERS: RefCell<FxHashMap<Language, Parser>> = RefCell::new(FxHashMap::default());
}

/// Parse `source` with the grammar for `language`.
pub fn parse_source(language: Language, source: &str) -> Result<Tree, ParseError> {
    PARSERS.with(|cell| -> Result<Tree, ParseError> {
        let mut parsers = cell.borrow_mut();
        let parser = match parsers.entry(language) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let mut parser = Parser::new();
                parser
                    .set_language(&language.ts_language())
                    .map_err(|_| ParseError::GrammarNotFound {
                        language: language.name().to_string(),
                    })?;
                entry.insert(parser)
            }
        };
        parser
            .parse(source, None)
            .ok_or_else(|| ParseError::TreeSitterError {
                language: language.name().to_string(),
                message: "parser returned no tree".to_string(),
            })
    })
}
