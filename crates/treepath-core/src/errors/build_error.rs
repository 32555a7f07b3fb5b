//! Tree building errors.
//!
//! All of these are precondition violations of the upstream parser output.

use super::error_code::{self, TreepathErrorCode};

/// Errors that can occur while rebuilding a parse tree into the node arena.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Line {row} out of range: source has {line_count} lines")]
    LineOutOfRange { row: usize, line_count: usize },

    #[error("Invalid columns {start}..{end} on line {row} (length {line_len})")]
    InvalidColumns {
        row: usize,
        start: usize,
        end: usize,
        line_len: usize,
    },

    #[error("Node `{kind}` ends at {end:?} before it starts at {start:?}")]
    EndBeforeStart {
        kind: String,
        start: (usize, usize),
        end: (usize, usize),
    },
}

impl TreepathErrorCode for BuildError {
    fn error_code(&self) -> &'static str {
        error_code::BUILD_ERROR
    }
}
