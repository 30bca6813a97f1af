use drills_challenges::search_rotated_array::{Challenge, Solution};

pub mod linear_scan;
pub mod one_pass_binary_search;
pub mod pivot_then_search;

register_algorithms!(
    recommended: one_pass_binary_search,
    [one_pass_binary_search, pivot_then_search, linear_scan]
);
