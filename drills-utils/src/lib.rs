mod hash;
pub use hash::*;
mod json;
pub use json::*;
mod tree;
pub use tree::*;
mod trie;
pub use trie::*;
mod union_find;
pub use union_find::*;
