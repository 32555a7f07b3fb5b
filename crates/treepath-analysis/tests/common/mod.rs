//! Shared hand-built parse trees.
#![allow(dead_code)]

use treepath_analysis::{RawNode, SyntaxTree, TreeBuilder, Verbatim};

/// Source for [`assignment_tree`].
pub const ASSIGNMENT_SOURCE: &str = "self.fooBar = baz(x)\n";

/// `self.fooBar = baz(x)` shaped like tree-sitter-python output.
pub fn assignment_tree() -> RawNode {
    RawNode::branch(
        "module",
        (0, 0),
        (1, 0),
        vec![RawNode::branch(
            "expression_statement",
            (0, 0),
            (0, 20),
            vec![RawNode::branch(
                "assignment",
                (0, 0),
                (0, 20),
                vec![
                    RawNode::branch(
                        "attribute",
                        (0, 0),
                        (0, 11),
                        vec![
                            RawNode::leaf("identifier", (0, 0), (0, 4)),
                            RawNode::leaf(".", (0, 4), (0, 5)),
                            RawNode::leaf("identifier", (0, 5), (0, 11)),
                        ],
                    ),
                    RawNode::leaf("=", (0, 12), (0, 13)),
                    RawNode::branch(
                        "call",
                        (0, 14),
                        (0, 20),
                        vec![
                            RawNode::leaf("identifier", (0, 14), (0, 17)),
                            RawNode::branch(
                                "argument_list",
                                (0, 17),
                                (0, 20),
                                vec![
                                    RawNode::leaf("(", (0, 17), (0, 18)),
                                    RawNode::leaf("identifier", (0, 18), (0, 19)),
                                    RawNode::leaf(")", (0, 19), (0, 20)),
                                ],
                            ),
                        ],
                    ),
                ],
            )],
        )],
    )
}

/// `a b`: a root whose children are all terminals.
pub const FLAT_SOURCE: &str = "a b";

pub fn flat_tree() -> RawNode {
    RawNode::branch(
        "module",
        (0, 0),
        (0, 3),
        vec![
            RawNode::leaf("identifier", (0, 0), (0, 1)),
            RawNode::leaf("identifier", (0, 2), (0, 3)),
        ],
    )
}

/// `count` lines of `fooBar`, each wrapped in its own `call` node.
pub fn repeated_calls(count: usize) -> (RawNode, String) {
    let children = (0..count)
        .map(|row| {
            RawNode::branch(
                "call",
                (row, 0),
                (row, 6),
                vec![RawNode::leaf("identifier", (row, 0), (row, 6))],
            )
        })
        .collect();
    let source = "fooBar\n".repeat(count);
    (RawNode::branch("module", (0, 0), (count, 0), children), source)
}

/// A single-child chain `depth` levels deep over the source `x`.
pub fn chain(depth: usize) -> RawNode {
    let mut node = RawNode::leaf("identifier", (0, 0), (0, 1));
    for _ in 1..depth {
        node = RawNode::branch("wrapper", (0, 0), (0, 1), vec![node]);
    }
    node
}

pub fn build(root: &RawNode, source: &str) -> SyntaxTree {
    let lines: Vec<&str> = source.split('\n').collect();
    TreeBuilder::new(&Verbatim).build(root, &lines).unwrap()
}
