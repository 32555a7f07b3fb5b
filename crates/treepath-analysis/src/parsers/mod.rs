//! Parser boundary: tree-sitter grammars, thread_local parser instances, and
//! the opaque node contract the tree builder consumes.

pub mod language;
pub mod manager;
pub mod syntax_node;

pub use language::Language;
pub use manager::parse_source;
pub use syntax_node::{Point, RawNode, SyntaxNode};
