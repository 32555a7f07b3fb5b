//! Pipeline errors.

use super::{BuildError, ConfigError, CoverageError, ParseError, TreepathErrorCode};

/// Errors that abort processing of one code unit.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    #[error("Coverage error: {0}")]
    Coverage(#[from] CoverageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TreepathErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::Build(e) => e.error_code(),
            Self::Coverage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
