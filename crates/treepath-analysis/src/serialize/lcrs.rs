//! Left-child/right-sibling in-order rendering: `(left(value)right)`.

use treepath_core::errors::SerializeError;

use crate::tree::{NodeId, SyntaxTree};

/// Render the binary view from the root. Every left-child or right-sibling
/// hop counts one level against `depth_limit`.
pub fn render(tree: &SyntaxTree, depth_limit: usize) -> Result<String, SerializeError> {
    let mut out = String::new();
    render_into(tree, Some(tree.root()), 1, depth_limit, &mut out)?;
    Ok(out)
}

fn render_into(
    tree: &SyntaxTree,
    id: Option<NodeId>,
    depth: usize,
    depth_limit: usize,
    out: &mut String,
) -> Result<(), SerializeError> {
    let Some(id) = id else {
        return Ok(());
    };
    if depth > depth_limit {
        return Err(SerializeError::DepthExceeded { limit: depth_limit });
    }
    let node = tree.node(id);
    out.push('(');
    render_into(tree, node.left_child, depth + 1, depth_limit, out)?;
    out.push('(');
    out.push_str(&node.label_value);
    out.push(')');
    render_into(tree, node.right_sibling, depth + 1, depth_limit, out)?;
    out.push(')');
    Ok(())
}
