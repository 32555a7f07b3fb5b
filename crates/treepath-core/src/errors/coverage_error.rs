//! Coverage errors.

use super::error_code::{self, TreepathErrorCode};

/// Errors that can occur while computing coverage ratios.
#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    #[error(
        "Degenerate tree: {terminals} terminal and {nonterminals} non-terminal labels leave no links to cover"
    )]
    DegenerateTree { terminals: usize, nonterminals: usize },
}

impl TreepathErrorCode for CoverageError {
    fn error_code(&self) -> &'static str {
        error_code::DEGENERATE_TREE
    }
}
