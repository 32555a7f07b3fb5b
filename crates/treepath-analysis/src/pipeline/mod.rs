//! Per-unit processing: parse, rebuild, extract, and corpus statistics.

pub mod features;
pub mod stats;
pub mod unit;

pub use features::{code_to_paths, doc_to_tokens, DataType, Document, PathMode};
pub use stats::run_stats;
pub use unit::{unit_rng, ProcessedUnit};
