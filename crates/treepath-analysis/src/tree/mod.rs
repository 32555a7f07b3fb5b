//! Node arena with multi-way and left-child/right-sibling views, plus the
//! breadth-first builder that fills it from parser output.

pub mod builder;
pub mod node;
pub mod tokenize;

pub use builder::TreeBuilder;
pub use node::{NodeId, SyntaxTree, TreeNode};
pub use tokenize::tokenize;
