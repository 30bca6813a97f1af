use drills_challenges::invert_binary_tree::{Challenge, Solution};

pub mod iterative_queue;
pub mod iterative_stack;
pub mod recursive;

register_algorithms!(
    recommended: recursive,
    [recursive, iterative_queue, iterative_stack]
);
