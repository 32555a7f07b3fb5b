//! Serialization errors.

use super::error_code::{self, TreepathErrorCode};

/// Errors that can occur while rendering a tree into a token stream.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    #[error("Recursion depth limit of {limit} exceeded")]
    DepthExceeded { limit: usize },
}

impl TreepathErrorCode for SerializeError {
    fn error_code(&self) -> &'static str {
        error_code::SERIALIZE_DEPTH
    }
}
