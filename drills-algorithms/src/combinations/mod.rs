use drills_challenges::combinations::{Challenge, Solution};

pub mod backtracking;
pub mod bitmask;
pub mod iterative_lexicographic;

register_algorithms!(
    recommended: backtracking,
    [backtracking, iterative_lexicographic, bitmask]
);
