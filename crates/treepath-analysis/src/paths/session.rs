//! Label accumulators for one parse unit.

use serde::Serialize;

use super::types::{LeafPath, RootPath};
use crate::SEPARATOR;

/// Everything path extraction records for the coverage computation.
///
/// A session belongs to exactly one tree; the coverage analyzer consumes it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionSession {
    /// Anchor of every terminal.
    pub terminal_nodes: Vec<String>,
    /// Ancestor labels of every terminal.
    pub nonterminal_nodes: Vec<String>,
    pub rootpath_terminal_nodes: Vec<String>,
    pub rootpath_nonterminal_nodes: Vec<String>,
    pub leafpath_terminal_nodes: Vec<String>,
    pub leafpath_nonterminal_nodes: Vec<String>,
}

impl ExtractionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_terminal(&mut self, path: &RootPath) {
        self.terminal_nodes.push(path.anchor.clone());
        self.nonterminal_nodes.extend(path.ancestors.iter().cloned());
    }

    pub(crate) fn record_sampled_root_path(&mut self, path: &RootPath) {
        self.rootpath_terminal_nodes.push(path.anchor.clone());
        self.rootpath_nonterminal_nodes.extend(path.ancestors.iter().cloned());
    }

    /// Splits the rendered path: first piece is the source, last the target.
    pub(crate) fn record_sampled_leaf_path(&mut self, path: &LeafPath) {
        let rendered = path.render();
        let mut pieces: Vec<&str> = rendered.split(SEPARATOR).collect();
        let target = pieces.pop().unwrap_or_default();
        let source = if pieces.is_empty() { "" } else { pieces.remove(0) };
        self.leafpath_terminal_nodes.push(source.to_string());
        self.leafpath_terminal_nodes.push(target.to_string());
        self.leafpath_nonterminal_nodes.extend(pieces.into_iter().map(str::to_string));
    }
}
