//! Corpus-level coverage averages.

use rayon::prelude::*;
use tracing::{info, warn};
use treepath_core::config::ExtractionConfig;
use treepath_core::errors::{PipelineError, TreepathErrorCode};

use super::unit::{unit_rng, ProcessedUnit};
use crate::coverage::{CoverageStats, CoverageSummary};
use crate::normalize::Normalizer;
use crate::parsers::Language;
use crate::pipeline::features::Document;

/// Coverage of every document's sampled paths, summed for averaging.
///
/// Documents are independent units processed in parallel. With a seed set,
/// document `i` draws from `seed + i`, so results do not depend on thread
/// scheduling. Failed documents are logged and counted, not averaged.
pub fn run_stats<N: Normalizer + ?Sized>(
    docs: &[Document],
    config: &ExtractionConfig,
    normalizer: &N,
) -> CoverageSummary {
    let summary = docs
        .par_iter()
        .enumerate()
        .map(|(index, doc)| {
            let mut summary = CoverageSummary::default();
            match document_coverage(doc, index, config, normalizer) {
                Ok(stats) => summary.record(&stats),
                Err(e) => {
                    warn!(index, language = %doc.language, error = %e.coded_string(), "document skipped");
                    summary.record_failure();
                }
            }
            summary
        })
        .reduce(CoverageSummary::default, CoverageSummary::merge);

    if let Some(avg) = summary.averages() {
        info!(
            processed = summary.processed,
            failed = summary.failed,
            avg_link_coverage_rootpath = avg.link_coverage_rootpath,
            avg_link_coverage_leafpath = avg.link_coverage_leafpath,
            avg_link_coverage_lcrs = avg.link_coverage_lcrs,
            avg_node_coverage_rootpath = avg.node_coverage_rootpath,
            avg_node_coverage_leafpath = avg.node_coverage_leafpath,
            "coverage statistics"
        );
    }
    summary
}

fn document_coverage<N: Normalizer + ?Sized>(
    doc: &Document,
    index: usize,
    config: &ExtractionConfig,
    normalizer: &N,
) -> Result<CoverageStats, PipelineError> {
    let language: Language = doc.language.parse()?;
    let unit = ProcessedUnit::from_source(&doc.code, language, config, normalizer)?;
    let mut rng = unit_rng(config.seed.map(|seed| seed.wrapping_add(index as u64)));
    Ok(unit.coverage(&mut rng)?)
}
