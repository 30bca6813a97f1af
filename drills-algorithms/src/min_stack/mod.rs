use drills_challenges::min_stack::{Challenge, Solution};

pub mod linked_nodes;
pub mod pair_stack;
pub mod two_stacks;

pub use linked_nodes::LinkedMinStack;
pub use pair_stack::PairMinStack;
pub use two_stacks::TwoStackMinStack;

register_algorithms!(recommended: pair_stack, [pair_stack, two_stacks, linked_nodes]);
