//! The opaque tree contract: a kind, start/end coordinates, ordered children.

use serde::{Deserialize, Serialize};

/// Zero-based (row, column) coordinate. Columns are byte offsets into the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Point {
    pub row: usize,
    pub column: usize,
}

impl Point {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Anything the tree builder can walk.
pub trait SyntaxNode: Sized {
    fn kind_name(&self) -> &str;
    fn start(&self) -> Point;
    fn end(&self) -> Point;
    /// All children in order, anonymous tokens included.
    fn child_nodes(&self) -> Vec<Self>;
}

impl<'tree> SyntaxNode for tree_sitter::Node<'tree> {
    fn kind_name(&self) -> &str {
        self.kind()
    }

    fn start(&self) -> Point {
        let p = self.start_position();
        Point::new(p.row, p.column)
    }

    fn end(&self) -> Point {
        let p = self.end_position();
        Point::new(p.row, p.column)
    }

    fn child_nodes(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        self.children(&mut cursor).collect()
    }
}

/// Plain owned parse tree, for parser output that does not come from
/// tree-sitter (e.g. deserialized from JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNode {
    pub kind: String,
    pub start: Point,
    pub end: Point,
    #[serde(default)]
    pub children: Vec<RawNode>,
}

impl RawNode {
    pub fn leaf(kind: &str, start: (usize, usize), end: (usize, usize)) -> Self {
        Self::branch(kind, start, end, Vec::new())
    }

    pub fn branch(
        kind: &str,
        start: (usize, usize),
        end: (usize, usize),
        children: Vec<RawNode>,
    ) -> Self {
        Self {
            kind: kind.to_string(),
            start: Point::new(start.0, start.1),
            end: Point::new(end.0, end.1),
            children,
        }
    }
}

impl<'a> SyntaxNode for &'a RawNode {
    fn kind_name(&self) -> &str {
        &self.kind
    }

    fn start(&self) -> Point {
        self.start
    }

    fn end(&self) -> Point {
        self.end
    }

    fn child_nodes(&self) -> Vec<Self> {
        self.children.iter().collect()
    }
}
