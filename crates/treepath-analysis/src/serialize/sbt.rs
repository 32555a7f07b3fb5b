//! Structure-based traversal: `value(children)value`.

use crate::tree::{NodeId, SyntaxTree};

pub fn render(tree: &SyntaxTree, id: NodeId) -> String {
    let mut out = String::new();
    render_into(tree, id, &mut out);
    out
}

fn render_into(tree: &SyntaxTree, id: NodeId, out: &mut String) {
    let node = tree.node(id);
    out.push_str(&node.label_value);
    out.push('(');
    for &child in &node.children {
        render_into(tree, child, out);
    }
    out.push(')');
    out.push_str(&node.label_value);
}
