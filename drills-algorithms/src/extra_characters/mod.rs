pub use drills_challenges::extra_characters::{Challenge, Solution};

pub mod dp_hashset;
pub mod dp_trie;
pub mod memoized_recursion;

register_algorithms!(
    recommended: dp_trie,
    [dp_trie, dp_hashset, memoized_recursion]
);
