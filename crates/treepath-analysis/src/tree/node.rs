//! Arena-backed tree nodes.
//!
//! Each node is owned once by the arena. The multi-way view (`parent` /
//! `children`) and the left-child/right-sibling view (`guardian` /
//! `left_child` / `right_sibling`) are both plain index relations into the
//! same arena, so neither back-reference implies ownership.

use serde::Serialize;

/// Index of a node in its [`SyntaxTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A single rebuilt node.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TreeNode {
    /// Lowercased, trimmed parser kind.
    pub label_type: String,
    /// Normalized text: desensitized source for non-terminals, tokenized and
    /// formalized source for terminals.
    pub label_value: String,
    /// `@start_row~start_col~end_row~end_col`.
    pub position_mark: String,
    /// First child of its parent.
    pub is_eldest: bool,

    // multi-way view
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,

    // left-child/right-sibling view
    /// Parent for an eldest child, left sibling otherwise.
    pub guardian: Option<NodeId>,
    pub left_child: Option<NodeId>,
    pub right_sibling: Option<NodeId>,
}

impl TreeNode {
    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }
}

/// One rebuilt parse tree: the arena, its terminals in discovery order, and
/// the number of non-terminals (each owns exactly one left-child link).
#[derive(Debug, Clone, Serialize)]
pub struct SyntaxTree {
    nodes: Vec<TreeNode>,
    terminals: Vec<NodeId>,
    eldest_count: usize,
}

impl SyntaxTree {
    pub(crate) fn with_root() -> Self {
        Self {
            nodes: vec![TreeNode::default()],
            terminals: Vec::new(),
            eldest_count: 0,
        }
    }

    pub(crate) fn alloc(&mut self) -> NodeId {
        self.nodes.push(TreeNode::default());
        NodeId(self.nodes.len() - 1)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0]
    }

    pub(crate) fn push_terminal(&mut self, id: NodeId) {
        self.terminals.push(id);
    }

    pub(crate) fn count_eldest(&mut self) {
        self.eldest_count += 1;
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    /// Leaves in breadth-first discovery order (not source order).
    pub fn terminals(&self) -> &[NodeId] {
        &self.terminals
    }

    pub fn eldest_count(&self) -> usize {
        self.eldest_count
    }

    /// Number of nodes in the arena. Never zero: the root is allocated up front.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate the ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.node(id).parent,
        }
    }
}

/// Iterator over the `parent` chain.
pub struct Ancestors<'t> {
    tree: &'t SyntaxTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.node(current).parent;
        Some(current)
    }
}
