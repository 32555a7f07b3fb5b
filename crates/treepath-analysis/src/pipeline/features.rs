//! Flat token features for models.

use serde::{Deserialize, Serialize};
use treepath_core::config::ExtractionConfig;
use treepath_core::errors::PipelineError;

use super::unit::{unit_rng, ProcessedUnit};
use crate::normalize::Normalizer;
use crate::parsers::Language;
use crate::paths::{ExtractionSession, LeafPath, RootPath};
use crate::{MARK_DELIMITER, SEPARATOR};

/// Which path family a feature sequence is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathMode {
    RootPath,
    LeafPath,
}

/// Feature source for one corpus record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    /// Pre-tokenized code shipped with the record.
    Code,
    RootPath,
    LeafPath,
}

/// One corpus record. Loading corpora is left to the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub language: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub function: String,
    #[serde(default)]
    pub code_tokens: Vec<String>,
    #[serde(default)]
    pub function_tokens: Vec<String>,
}

/// Flat token sequence of `source` in the given mode, with node values run
/// through `normalizer`.
pub fn code_to_paths<N: Normalizer + ?Sized>(
    source: &str,
    language: Language,
    mode: PathMode,
    config: &ExtractionConfig,
    normalizer: &N,
) -> Result<Vec<String>, PipelineError> {
    let unit = ProcessedUnit::from_source(source, language, config, normalizer)?;
    let mut session = ExtractionSession::new();
    let mut rng = unit_rng(config.seed);
    Ok(match mode {
        PathMode::RootPath => root_path_tokens(&unit.root_paths(&mut session, &mut rng)),
        PathMode::LeafPath => leaf_path_tokens(&unit.leaf_paths(&mut session, &mut rng)),
    })
}

/// Tokens for `doc`: evaluation reads `function`/`function_tokens`,
/// otherwise `code`/`code_tokens`.
pub fn doc_to_tokens<N: Normalizer + ?Sized>(
    doc: &Document,
    data_type: DataType,
    evaluation: bool,
    config: &ExtractionConfig,
    normalizer: &N,
) -> Result<Vec<String>, PipelineError> {
    let mode = match data_type {
        DataType::Code => {
            let tokens = if evaluation { &doc.function_tokens } else { &doc.code_tokens };
            return Ok(tokens.clone());
        }
        DataType::RootPath => PathMode::RootPath,
        DataType::LeafPath => PathMode::LeafPath,
    };
    let language: Language = doc.language.parse()?;
    let source = if evaluation { &doc.function } else { &doc.code };
    code_to_paths(source, language, mode, config, normalizer)
}

/// Ancestor labels, then anchor sub-tokens, per path in sampling order.
pub fn root_path_tokens(paths: &[RootPath]) -> Vec<String> {
    let mut tokens = Vec::new();
    for path in paths {
        tokens.extend(path.ancestors.iter().map(|label| unmark(label)));
        tokens.extend(unmark(&path.anchor).split(SEPARATOR).map(str::to_string));
    }
    tokens.retain(|token| !token.is_empty());
    tokens
}

/// Every piece of every rendered leaf path.
pub fn leaf_path_tokens(paths: &[LeafPath]) -> Vec<String> {
    let mut tokens: Vec<String> = paths
        .iter()
        .flat_map(|path| path.tokens())
        .map(|token| unmark(&token))
        .collect();
    tokens.retain(|token| !token.is_empty());
    tokens
}

/// Drop a trailing position mark, if any.
fn unmark(token: &str) -> String {
    match token.rfind(MARK_DELIMITER) {
        Some(at) => token[..at].to_string(),
        None => token.to_string(),
    }
}
