//! Root path derivation for a single terminal.

use std::collections::VecDeque;

use treepath_core::config::TreeStyle;

use super::types::RootPath;
use crate::tree::{NodeId, SyntaxTree};
use crate::{HIERARCHY_KIND, IDENTIFIER_KIND, SEPARATOR};

/// Walk `parent` links from `terminal` to the root, labelling each ancestor
/// by kind or value (plus its own mark) according to `style`.
///
/// Hierarchical styles drop everything collected below the first
/// `expression_statement` met on the way up, and replace the anchor with the
/// sub-tokens of every identifier inside that statement.
pub fn root_path(tree: &SyntaxTree, terminal: NodeId, style: TreeStyle) -> RootPath {
    let mut labels: Vec<String> = Vec::new();
    let mut statement: Option<NodeId> = None;

    for id in tree.ancestors(terminal) {
        let ancestor = tree.node(id);
        let label = if style.uses_type_labels() {
            &ancestor.label_type
        } else {
            &ancestor.label_value
        };
        labels.push(format!("{label}{}", ancestor.position_mark));

        if style.is_hierarchical() && statement.is_none() && ancestor.label_type == HIERARCHY_KIND {
            statement = Some(id);
            labels.clear();
        }
    }
    labels.reverse();

    let node = tree.node(terminal);
    let value = match statement {
        Some(id) => statement_identifiers(tree, id),
        None => node.label_value.clone(),
    };
    RootPath {
        ancestors: labels,
        anchor: format!("{value}{}", node.position_mark),
    }
}

/// Level-order sub-tokens of every identifier under `statement`.
fn statement_identifiers(tree: &SyntaxTree, statement: NodeId) -> String {
    let mut values: Vec<&str> = Vec::new();
    let mut queue = VecDeque::from([statement]);
    while let Some(id) = queue.pop_front() {
        let node = tree.node(id);
        if node.label_type == IDENTIFIER_KIND {
            values.extend(node.label_value.split(SEPARATOR));
        }
        queue.extend(node.children.iter().copied());
    }
    values.join(&SEPARATOR.to_string())
}
