//! Root-path and leaf-path extraction under quota-limited sampling.

pub mod extractor;
pub mod leaf_paths;
pub mod root_paths;
pub mod sampling;
pub mod session;
pub mod types;

pub use extractor::PathExtractor;
pub use leaf_paths::{merge_paths, MergedPath};
pub use root_paths::root_path;
pub use session::ExtractionSession;
pub use types::{LeafPath, RootPath};
