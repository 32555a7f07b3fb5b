//! Path value types.

use serde::{Deserialize, Serialize};

use crate::SEPARATOR;

/// Ancestor labels from the root down to a terminal's parent, plus the
/// terminal's (possibly aggregated) value. Both carry position marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootPath {
    pub ancestors: Vec<String>,
    pub anchor: String,
}

impl RootPath {
    /// Number of separator-delimited pieces in the anchor.
    pub fn anchor_token_count(&self) -> usize {
        self.anchor.split(SEPARATOR).count()
    }

    pub fn is_multi_token(&self) -> bool {
        self.anchor_token_count() > 1
    }
}

/// Two root paths joined at their lowest common ancestor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafPath {
    pub source: String,
    pub middle: Vec<String>,
    pub target: String,
}

impl LeafPath {
    /// `source|middle…|target`.
    pub fn render(&self) -> String {
        let separator = SEPARATOR.to_string();
        let mut parts = Vec::with_capacity(self.middle.len() + 2);
        parts.push(self.source.as_str());
        parts.extend(self.middle.iter().map(String::as_str));
        parts.push(self.target.as_str());
        parts.join(&separator)
    }

    /// The rendered string split on the separator. Multi-token endpoint
    /// values spill into this sequence piece by piece.
    pub fn tokens(&self) -> Vec<String> {
        self.render().split(SEPARATOR).map(str::to_string).collect()
    }
}
