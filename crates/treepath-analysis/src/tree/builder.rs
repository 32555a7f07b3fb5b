//! Breadth-first rebuild of parser output into a [`SyntaxTree`].

use std::collections::VecDeque;

use tracing::debug;
use treepath_core::errors::BuildError;

use super::node::{NodeId, SyntaxTree};
use super::tokenize::tokenize;
use crate::normalize::Normalizer;
use crate::parsers::{Point, SyntaxNode};
use crate::MARK_DELIMITER;

/// Walks the opaque tree and the new arena in lockstep.
pub struct TreeBuilder<'n, N: Normalizer + ?Sized> {
    normalizer: &'n N,
}

impl<'n, N: Normalizer + ?Sized> TreeBuilder<'n, N> {
    pub fn new(normalizer: &'n N) -> Self {
        Self { normalizer }
    }

    /// Build the arena for `root`, slicing token text out of `lines`.
    ///
    /// Children are allocated and linked when their parent is dequeued, so
    /// the terminal list comes out in level order.
    pub fn build<S: SyntaxNode>(&self, root: S, lines: &[&str]) -> Result<SyntaxTree, BuildError> {
        let mut tree = SyntaxTree::with_root();
        let mut queue: VecDeque<(NodeId, S)> = VecDeque::new();
        queue.push_back((tree.root(), root));

        while let Some((id, raw)) = queue.pop_front() {
            let kind = raw.kind_name().trim().to_lowercase();
            let (start, end) = (raw.start(), raw.end());
            let token = query_token(&kind, start, end, lines)?;
            let raw_children = raw.child_nodes();

            {
                let node = tree.node_mut(id);
                node.position_mark = position_mark(start, end);
                node.label_type = kind;
            }

            if raw_children.is_empty() {
                let value = self.normalizer.formalize(&tokenize(token));
                tree.node_mut(id).label_value = value;
                tree.push_terminal(id);
                continue;
            }

            tree.count_eldest();
            tree.node_mut(id).label_value = self.normalizer.desensitize(token);

            let mut left_sibling: Option<NodeId> = None;
            for raw_child in raw_children {
                let child = tree.alloc();
                match left_sibling {
                    Some(sibling) => {
                        tree.node_mut(child).guardian = Some(sibling);
                        tree.node_mut(sibling).right_sibling = Some(child);
                    }
                    None => {
                        let node = tree.node_mut(child);
                        node.guardian = Some(id);
                        node.is_eldest = true;
                        tree.node_mut(id).left_child = Some(child);
                    }
                }
                left_sibling = Some(child);
                tree.node_mut(child).parent = Some(id);
                tree.node_mut(id).children.push(child);
                queue.push_back((child, raw_child));
            }
        }

        debug!(
            nodes = tree.node_count(),
            terminals = tree.terminals().len(),
            eldest = tree.eldest_count(),
            "syntax tree built"
        );
        Ok(tree)
    }
}

/// `@sr~sc~er~ec`.
fn position_mark(start: Point, end: Point) -> String {
    format!(
        "{MARK_DELIMITER}{}~{}~{}~{}",
        start.row, start.column, end.row, end.column
    )
}

/// Source text covered by a node. A node spanning several lines yields the
/// rest of its first line only.
fn query_token<'s>(kind: &str, start: Point, end: Point, lines: &[&'s str]) -> Result<&'s str, BuildError> {
    if end < start {
        return Err(BuildError::EndBeforeStart {
            kind: kind.to_string(),
            start: (start.row, start.column),
            end: (end.row, end.column),
        });
    }
    let line = *lines.get(start.row).ok_or(BuildError::LineOutOfRange {
        row: start.row,
        line_count: lines.len(),
    })?;

    let slice = if start.row != end.row {
        line.get(start.column..)
    } else {
        line.get(start.column..end.column)
    };
    slice.ok_or(BuildError::InvalidColumns {
        row: start.row,
        start: start.column,
        end: if start.row != end.row { line.len() } else { end.column },
        line_len: line.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_token_is_sliced_by_column() {
        let lines = ["x = foo(1)"];
        let token = query_token("call", Point::new(0, 4), Point::new(0, 10), &lines).unwrap();
        assert_eq!(token, "foo(1)");
    }

    #[test]
    fn multi_line_token_keeps_first_line_suffix() {
        let lines = ["def f(a):", "    return a"];
        let token = query_token("function_definition", Point::new(0, 4), Point::new(1, 12), &lines).unwrap();
        assert_eq!(token, "f(a):");
    }

    #[test]
    fn out_of_range_line_fails() {
        let lines = ["a"];
        let err = query_token("identifier", Point::new(3, 0), Point::new(3, 1), &lines).unwrap_err();
        assert!(matches!(err, BuildError::LineOutOfRange { row: 3, line_count: 1 }));
    }

    #[test]
    fn reversed_points_fail() {
        let lines = ["abc"];
        let err = query_token("identifier", Point::new(0, 2), Point::new(0, 1), &lines).unwrap_err();
        assert!(matches!(err, BuildError::EndBeforeStart { .. }));
    }

    #[test]
    fn column_past_line_end_fails() {
        let lines = ["abc"];
        let err = query_token("identifier", Point::new(0, 1), Point::new(0, 9), &lines).unwrap_err();
        assert!(matches!(err, BuildError::InvalidColumns { line_len: 3, .. }));
    }

    #[test]
    fn mark_encodes_all_four_coordinates() {
        assert_eq!(position_mark(Point::new(1, 4), Point::new(1, 7)), "@1~4~1~7");
    }
}
