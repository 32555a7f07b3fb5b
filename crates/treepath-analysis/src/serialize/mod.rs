//! Whole-tree linear token forms.

pub mod lcrs;
pub mod sbt;

use crate::tree::SyntaxTree;

/// Characters that delimit tokens in a rendered tree string.
const TOKEN_DELIMITERS: &[char] = &['(', '|', ')'];

/// Renders a tree as structure-based or left-child/right-sibling tokens.
pub struct Serializer<'t> {
    tree: &'t SyntaxTree,
    lcrs_depth_limit: usize,
}

impl<'t> Serializer<'t> {
    pub fn new(tree: &'t SyntaxTree, lcrs_depth_limit: usize) -> Self {
        Self {
            tree,
            lcrs_depth_limit,
        }
    }

    /// Structure-based traversal tokens over the multi-way view.
    pub fn sbt(&self) -> Vec<String> {
        split_tokens(&sbt::render(self.tree, self.tree.root()))
    }

    /// Left-child/right-sibling tokens, or [`Self::sbt`] when the binary view
    /// is deeper than the configured limit.
    pub fn lcrs(&self) -> Vec<String> {
        match lcrs::render(self.tree, self.lcrs_depth_limit) {
            Ok(rendered) => split_tokens(&rendered),
            Err(e) => {
                tracing::warn!(
                    nodes = self.tree.node_count(),
                    error = %e,
                    "lcrs rendering too deep, falling back to sbt"
                );
                self.sbt()
            }
        }
    }
}

fn split_tokens(rendered: &str) -> Vec<String> {
    rendered
        .split(TOKEN_DELIMITERS)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
