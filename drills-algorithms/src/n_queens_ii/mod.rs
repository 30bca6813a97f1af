use drills_challenges::n_queens_ii::{Challenge, Solution};

pub mod backtracking;
pub mod bitmask;
pub mod permutations;

register_algorithms!(recommended: backtracking, [backtracking, bitmask, permutations]);
