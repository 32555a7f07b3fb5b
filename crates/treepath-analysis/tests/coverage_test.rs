//! Tests for coverage statistics.

mod common;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use treepath_analysis::{CoverageAnalyzer, CoverageStats, CoverageSummary, ExtractionSession, PathExtractor};
use treepath_core::config::{ExtractionConfig, PathStyle, TreeStyle};
use treepath_core::errors::CoverageError;

use common::*;

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-12
}

fn ast_coverage(tree: &treepath_analysis::SyntaxTree) -> CoverageStats {
    let config = ExtractionConfig {
        tree_style: Some(TreeStyle::Ast),
        path_style: Some(PathStyle::L2L),
        ..Default::default()
    };
    let mut session = ExtractionSession::new();
    let mut rng = StdRng::seed_from_u64(3);
    PathExtractor::new(tree, &config).generate_leaf_paths(&mut session, &mut rng);
    CoverageAnalyzer::analyze(session, tree.eldest_count()).unwrap()
}

#[test]
fn test_coverage_of_assignment() {
    let tree = build(&assignment_tree(), ASSIGNMENT_SOURCE);
    let stats = ast_coverage(&tree);
    // 8 terminals + 6 non-terminals, all with distinct marks
    assert!(close(stats.link_coverage_rootpath, 9.0 / 13.0));
    // multi-token endpoints spill `bar@…` into the non-terminal set
    assert!(close(stats.link_coverage_leafpath, 8.0 / 13.0));
    assert!(close(stats.link_coverage_lcrs, 6.0 / 13.0));
    assert!(close(stats.node_coverage_rootpath, 10.0 / 14.0));
    assert!(close(stats.node_coverage_leafpath, 9.0 / 14.0));
}

#[test]
fn test_empty_leaf_sample_gives_negative_link_coverage() {
    let tree = build(&flat_tree(), FLAT_SOURCE);
    let stats = ast_coverage(&tree);
    // full: 2 terminals + 1 non-terminal
    assert!(close(stats.link_coverage_leafpath, -1.0 / 2.0));
    assert!(close(stats.node_coverage_leafpath, 0.0));
    assert!(close(stats.link_coverage_lcrs, 1.0 / 2.0));
}

#[test]
fn test_single_node_tree_is_degenerate() {
    let root = treepath_analysis::RawNode::leaf("identifier", (0, 0), (0, 1));
    let tree = build(&root, "x");
    let mut session = ExtractionSession::new();
    let mut rng = StdRng::seed_from_u64(0);
    let config = ExtractionConfig::default();
    PathExtractor::new(&tree, &config).generate_leaf_paths(&mut session, &mut rng);
    let err = CoverageAnalyzer::analyze(session, tree.eldest_count()).unwrap_err();
    assert!(matches!(err, CoverageError::DegenerateTree { terminals: 1, nonterminals: 0 }));
}

#[test]
fn test_summary_averages_processed_units() {
    let stats = CoverageStats {
        link_coverage_rootpath: 0.5,
        link_coverage_leafpath: 0.25,
        link_coverage_lcrs: 1.0,
        node_coverage_rootpath: 0.5,
        node_coverage_leafpath: 0.0,
    };
    let mut left = CoverageSummary::default();
    left.record(&stats);
    left.record_failure();
    let mut right = CoverageSummary::default();
    right.record(&CoverageStats::default());

    let merged = left.merge(right);
    assert_eq!(merged.processed, 2);
    assert_eq!(merged.failed, 1);
    let avg = merged.averages().unwrap();
    assert!(close(avg.link_coverage_rootpath, 0.25));
    assert!(close(avg.link_coverage_lcrs, 0.5));
    assert!(CoverageSummary::default().averages().is_none());
}

fn session_strategy() -> impl Strategy<Value = (ExtractionSession, usize)> {
    (2usize..20, 1usize..10, any::<u64>()).prop_map(|(terminals, nonterminals, mask)| {
        let mut session = ExtractionSession::new();
        for i in 0..terminals {
            session.terminal_nodes.push(format!("t{}@{i}~0~{i}~1", i % 4));
        }
        for i in 0..nonterminals {
            session.nonterminal_nodes.push(format!("n{i}@{i}~0~{i}~9"));
        }
        let keep = |i: usize| mask & (1 << (i % 64)) != 0;
        session.rootpath_terminal_nodes =
            session.terminal_nodes.iter().enumerate().filter(|(i, _)| keep(*i)).map(|(_, s)| s.clone()).collect();
        session.rootpath_nonterminal_nodes =
            session.nonterminal_nodes.iter().enumerate().filter(|(i, _)| keep(i + 20)).map(|(_, s)| s.clone()).collect();
        session.leafpath_terminal_nodes = session.rootpath_terminal_nodes.clone();
        (session, nonterminals)
    })
}

proptest! {
    #[test]
    fn node_coverage_is_a_fraction((session, eldest) in session_strategy()) {
        let stats = CoverageAnalyzer::analyze(session, eldest).unwrap();
        prop_assert!((0.0..=1.0).contains(&stats.node_coverage_rootpath));
        prop_assert!((0.0..=1.0).contains(&stats.node_coverage_leafpath));
        prop_assert!(stats.link_coverage_rootpath <= 1.0);
        prop_assert!(stats.link_coverage_lcrs > 0.0);
    }
}
