//! Quota-limited root-path and leaf-path generation over one tree.

use rand::Rng;
use tracing::debug;
use treepath_core::config::ExtractionConfig;

use super::leaf_paths::merge_paths;
use super::root_paths::root_path;
use super::sampling::fill_quota;
use super::session::ExtractionSession;
use super::types::{LeafPath, RootPath};
use crate::tree::SyntaxTree;
use crate::IDENTIFIER_KIND;

/// Path generation for one [`SyntaxTree`].
///
/// Randomness only enters when a bucket overflows its quota; pass a seeded
/// RNG for reproducible output.
pub struct PathExtractor<'t> {
    tree: &'t SyntaxTree,
    config: &'t ExtractionConfig,
}

impl<'t> PathExtractor<'t> {
    pub fn new(tree: &'t SyntaxTree, config: &'t ExtractionConfig) -> Self {
        Self { tree, config }
    }

    /// Root paths of every terminal go into the session's full-tree
    /// accumulators; identifier terminals compete for the sampled set, with
    /// multi-token anchors preferred over single-token ones.
    pub fn generate_root_paths<R: Rng + ?Sized>(
        &self,
        session: &mut ExtractionSession,
        rng: &mut R,
    ) -> Vec<RootPath> {
        let style = self.config.effective_tree_style();
        let mut multi_token: Vec<RootPath> = Vec::new();
        let mut single_token: Vec<RootPath> = Vec::new();

        for &terminal in self.tree.terminals() {
            let path = root_path(self.tree, terminal, style);
            session.record_terminal(&path);
            if self.tree.node(terminal).label_type != IDENTIFIER_KIND {
                continue;
            }
            if path.ancestors.is_empty() || path.anchor.is_empty() {
                continue;
            }
            if path.is_multi_token() {
                multi_token.push(path);
            } else {
                single_token.push(path);
            }
        }

        debug!(
            multi_token = multi_token.len(),
            single_token = single_token.len(),
            "root path buckets"
        );
        let threshold = self.config.effective_root_path_threshold();
        let selected = fill_quota(vec![multi_token, single_token], threshold, rng);
        for path in &selected {
            session.record_sampled_root_path(path);
        }
        selected
    }

    /// Generate root paths, then leaf paths over them.
    pub fn generate_leaf_paths<R: Rng + ?Sized>(
        &self,
        session: &mut ExtractionSession,
        rng: &mut R,
    ) -> Vec<LeafPath> {
        let roots = self.generate_root_paths(session, rng);
        self.generate_leaf_paths_from(&roots, session, rng)
    }

    /// Pair up `roots` in index order and keep qualifying leaf paths, tiered
    /// by how many endpoints carry multi-token values.
    ///
    /// Once the two-sided tier reaches the quota, pairs that could only land
    /// in a lower tier are skipped before merging; likewise for the
    /// zero-sided tier once the top two tiers together reach it.
    pub fn generate_leaf_paths_from<R: Rng + ?Sized>(
        &self,
        roots: &[RootPath],
        session: &mut ExtractionSession,
        rng: &mut R,
    ) -> Vec<LeafPath> {
        let threshold = self.config.effective_leaf_path_threshold();
        let width = self.config.effective_path_width_threshold();
        let length = self.config.effective_path_length_threshold();
        let style = self.config.effective_path_style();

        let mut both_multi: Vec<LeafPath> = Vec::new();
        let mut one_multi: Vec<LeafPath> = Vec::new();
        let mut no_multi: Vec<LeafPath> = Vec::new();

        for (i, u) in roots.iter().enumerate() {
            for v in &roots[i + 1..] {
                let (u_multi, v_multi) = (u.is_multi_token(), v.is_multi_token());
                if both_multi.len() >= threshold {
                    if !u_multi || !v_multi {
                        continue;
                    }
                } else if both_multi.len() + one_multi.len() >= threshold && !u_multi && !v_multi {
                    continue;
                }

                let Some(merged) = merge_paths(&u.ancestors, &v.ancestors) else {
                    continue;
                };
                if !merged.qualifies(width, length) {
                    continue;
                }

                let path = LeafPath {
                    source: u.anchor.clone(),
                    middle: merged.middle(style),
                    target: v.anchor.clone(),
                };
                match (u_multi, v_multi) {
                    (true, true) => both_multi.push(path),
                    (false, false) => no_multi.push(path),
                    _ => one_multi.push(path),
                }
            }
        }

        debug!(
            both_multi = both_multi.len(),
            one_multi = one_multi.len(),
            no_multi = no_multi.len(),
            "leaf path tiers"
        );
        let selected = fill_quota(vec![both_multi, one_multi, no_multi], threshold, rng);
        for path in &selected {
            session.record_sampled_leaf_path(path);
        }
        selected
    }
}
