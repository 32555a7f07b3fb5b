//! TreepathErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait TreepathErrorCode {
    /// Returns the error code string (e.g., "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const UNSUPPORTED_LANGUAGE: &str = "UNSUPPORTED_LANGUAGE";
pub const BUILD_ERROR: &str = "BUILD_ERROR";
pub const SERIALIZE_DEPTH: &str = "SERIALIZE_DEPTH";
pub const DEGENERATE_TREE: &str = "DEGENERATE_TREE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
