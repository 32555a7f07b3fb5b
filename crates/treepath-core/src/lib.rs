//! Core types, errors, config, and tracing for the treepath feature extractor.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;
