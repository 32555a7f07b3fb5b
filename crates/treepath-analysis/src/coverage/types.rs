//! Coverage result types.

use serde::{Deserialize, Serialize};

/// The five coverage ratios of one parse unit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CoverageStats {
    pub link_coverage_rootpath: f64,
    pub link_coverage_leafpath: f64,
    pub link_coverage_lcrs: f64,
    pub node_coverage_rootpath: f64,
    pub node_coverage_leafpath: f64,
}

impl CoverageStats {
    fn add(&mut self, other: &CoverageStats) {
        self.link_coverage_rootpath += other.link_coverage_rootpath;
        self.link_coverage_leafpath += other.link_coverage_leafpath;
        self.link_coverage_lcrs += other.link_coverage_lcrs;
        self.node_coverage_rootpath += other.node_coverage_rootpath;
        self.node_coverage_leafpath += other.node_coverage_leafpath;
    }

    fn scaled(&self, factor: f64) -> CoverageStats {
        CoverageStats {
            link_coverage_rootpath: self.link_coverage_rootpath * factor,
            link_coverage_leafpath: self.link_coverage_leafpath * factor,
            link_coverage_lcrs: self.link_coverage_lcrs * factor,
            node_coverage_rootpath: self.node_coverage_rootpath * factor,
            node_coverage_leafpath: self.node_coverage_leafpath * factor,
        }
    }
}

/// Running totals over many units.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub processed: usize,
    pub failed: usize,
    pub totals: CoverageStats,
}

impl CoverageSummary {
    pub fn record(&mut self, stats: &CoverageStats) {
        self.processed += 1;
        self.totals.add(stats);
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// Combine two partial summaries.
    pub fn merge(mut self, other: CoverageSummary) -> CoverageSummary {
        self.processed += other.processed;
        self.failed += other.failed;
        self.totals.add(&other.totals);
        self
    }

    /// Mean ratios over the successfully processed units.
    pub fn averages(&self) -> Option<CoverageStats> {
        (self.processed > 0).then(|| self.totals.scaled(1.0 / self.processed as f64))
    }
}
