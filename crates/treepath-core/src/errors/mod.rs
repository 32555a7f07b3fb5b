//! Error handling for treepath.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod build_error;
pub mod config_error;
pub mod coverage_error;
pub mod error_code;
pub mod parse_error;
pub mod pipeline_error;
pub mod serialize_error;

pub use build_error::BuildError;
pub use config_error::ConfigError;
pub use coverage_error::CoverageError;
pub use error_code::TreepathErrorCode;
pub use parse_error::ParseError;
pub use pipeline_error::PipelineError;
pub use serialize_error::SerializeError;
