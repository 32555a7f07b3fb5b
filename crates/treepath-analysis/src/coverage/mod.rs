//! Link and node coverage of sampled paths against the full tree.

pub mod analyzer;
pub mod types;

pub use analyzer::CoverageAnalyzer;
pub use types::{CoverageStats, CoverageSummary};
