//! Parser errors.

use super::error_code::{self, TreepathErrorCode};

/// Errors raised at the parser boundary, before any tree is rebuilt.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Unsupported language: {name}")]
    UnsupportedLanguage { name: String },

    #[error("Grammar not found for language: {language}")]
    GrammarNotFound { language: String },

    #[error("Tree-sitter error parsing {language} source: {message}")]
    TreeSitterError { language: String, message: String },
}

impl TreepathErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedLanguage { .. } => error_code::UNSUPPORTED_LANGUAGE,
            _ => error_code::PARSE_ERROR,
        }
    }
}
