//! treepath-analysis: rebuilds tree-sitter parse trees into a dual-linked node
//! arena and derives root paths, leaf paths, linear serializations, and
//! coverage statistics from it.

pub mod coverage;
pub mod normalize;
pub mod parsers;
pub mod paths;
pub mod pipeline;
pub mod serialize;
pub mod tree;

pub use coverage::{CoverageAnalyzer, CoverageStats, CoverageSummary};
pub use normalize::{Normalizer, Verbatim};
pub use parsers::{Language, RawNode, SyntaxNode};
pub use paths::{ExtractionSession, LeafPath, PathExtractor, RootPath};
pub use pipeline::{code_to_paths, doc_to_tokens, run_stats, DataType, Document, PathMode, ProcessedUnit};
pub use serialize::Serializer;
pub use tree::{NodeId, SyntaxTree, TreeBuilder, TreeNode};

/// Divider between sub-tokens inside a value and between tokens of a path string.
pub const SEPARATOR: char = '|';

/// Leading character of every position mark.
pub const MARK_DELIMITER: char = '@';

/// Node kind that anchors hierarchy truncation in HST/HPT styles.
pub const HIERARCHY_KIND: &str = "expression_statement";

/// Node kind of sampling candidates.
pub const IDENTIFIER_KIND: &str = "identifier";
