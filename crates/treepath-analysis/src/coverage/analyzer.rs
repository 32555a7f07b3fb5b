//! Coverage computation over an [`ExtractionSession`].

use treepath_core::errors::CoverageError;
use treepath_core::types::collections::FxHashSet;

use super::types::CoverageStats;
use crate::paths::ExtractionSession;
use crate::MARK_DELIMITER;

pub struct CoverageAnalyzer;

impl CoverageAnalyzer {
    /// Link coverage counts distinct marked labels, node coverage distinct
    /// labels with marks stripped. Terminal and non-terminal sets are sized
    /// separately and summed, never unioned.
    ///
    /// Fails on trees with fewer than two distinct labels, where the link
    /// denominator would be zero.
    pub fn analyze(session: ExtractionSession, eldest_count: usize) -> Result<CoverageStats, CoverageError> {
        let terminals = distinct(&session.terminal_nodes);
        let nonterminals = distinct(&session.nonterminal_nodes);
        let full_links = terminals + nonterminals;
        if full_links < 2 {
            return Err(CoverageError::DegenerateTree { terminals, nonterminals });
        }
        let link_denominator = (full_links - 1) as f64;
        let link = |t: &[String], n: &[String]| {
            (distinct(t) + distinct(n)) as f64 - 1.0
        };

        let full_nodes = distinct_unmarked(&session.terminal_nodes)
            + distinct_unmarked(&session.nonterminal_nodes);
        let node = |t: &[String], n: &[String]| {
            (distinct_unmarked(t) + distinct_unmarked(n)) as f64 / full_nodes as f64
        };

        Ok(CoverageStats {
            link_coverage_rootpath: link(
                &session.rootpath_terminal_nodes,
                &session.rootpath_nonterminal_nodes,
            ) / link_denominator,
            link_coverage_leafpath: link(
                &session.leafpath_terminal_nodes,
                &session.leafpath_nonterminal_nodes,
            ) / link_denominator,
            link_coverage_lcrs: eldest_count as f64 / link_denominator,
            node_coverage_rootpath: node(
                &session.rootpath_terminal_nodes,
                &session.rootpath_nonterminal_nodes,
            ),
            node_coverage_leafpath: node(
                &session.leafpath_terminal_nodes,
                &session.leafpath_nonterminal_nodes,
            ),
        })
    }
}

fn distinct(labels: &[String]) -> usize {
    labels.iter().map(String::as_str).collect::<FxHashSet<&str>>().len()
}

/// Text before the first mark delimiter.
fn strip_mark(label: &str) -> &str {
    label.split(MARK_DELIMITER).next().unwrap_or(label)
}

fn distinct_unmarked(labels: &[String]) -> usize {
    labels.iter().map(|label| strip_mark(label)).collect::<FxHashSet<&str>>().len()
}
