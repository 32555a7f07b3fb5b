//! One code unit, parsed and rebuilt.

use rand::rngs::StdRng;
use rand::SeedableRng;
use treepath_core::config::ExtractionConfig;
use treepath_core::errors::{CoverageError, PipelineError};

use crate::coverage::{CoverageAnalyzer, CoverageStats};
use crate::normalize::Normalizer;
use crate::parsers::{parse_source, Language, RawNode};
use crate::paths::{ExtractionSession, LeafPath, PathExtractor, RootPath};
use crate::serialize::Serializer;
use crate::tree::{SyntaxTree, TreeBuilder};

/// RNG for one unit: seeded when `seed` is set, entropy-seeded otherwise.
pub fn unit_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// A rebuilt tree plus the configuration it is processed under. Nothing
/// here outlives the unit.
pub struct ProcessedUnit<'c> {
    tree: SyntaxTree,
    config: &'c ExtractionConfig,
}

impl<'c> ProcessedUnit<'c> {
    /// Parse `source` with tree-sitter and rebuild the result.
    pub fn from_source<N: Normalizer + ?Sized>(
        source: &str,
        language: Language,
        config: &'c ExtractionConfig,
        normalizer: &N,
    ) -> Result<Self, PipelineError> {
        let parsed = parse_source(language, source)?;
        let lines: Vec<&str> = source.split('\n').collect();
        let tree = TreeBuilder::new(normalizer).build(parsed.root_node(), &lines)?;
        Ok(Self { tree, config })
    }

    /// Rebuild parser output that did not come from tree-sitter.
    pub fn from_raw<N: Normalizer + ?Sized>(
        root: &RawNode,
        source: &str,
        config: &'c ExtractionConfig,
        normalizer: &N,
    ) -> Result<Self, PipelineError> {
        let lines: Vec<&str> = source.split('\n').collect();
        let tree = TreeBuilder::new(normalizer).build(root, &lines)?;
        Ok(Self { tree, config })
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn extractor(&self) -> PathExtractor<'_> {
        PathExtractor::new(&self.tree, self.config)
    }

    pub fn serializer(&self) -> Serializer<'_> {
        Serializer::new(&self.tree, self.config.effective_lcrs_depth_limit())
    }

    pub fn root_paths(&self, session: &mut ExtractionSession, rng: &mut StdRng) -> Vec<RootPath> {
        self.extractor().generate_root_paths(session, rng)
    }

    pub fn leaf_paths(&self, session: &mut ExtractionSession, rng: &mut StdRng) -> Vec<LeafPath> {
        self.extractor().generate_leaf_paths(session, rng)
    }

    /// Leaf paths (and with them root paths) followed by coverage.
    pub fn coverage(&self, rng: &mut StdRng) -> Result<CoverageStats, CoverageError> {
        let mut session = ExtractionSession::new();
        self.leaf_paths(&mut session, rng);
        CoverageAnalyzer::analyze(session, self.tree.eldest_count())
    }
}
