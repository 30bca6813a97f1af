use drills_challenges::min_subarray_sum::{Challenge, Solution};

pub mod brute_force;
pub mod prefix_binary_search;
pub mod sliding_window;

register_algorithms!(
    recommended: sliding_window,
    [sliding_window, prefix_binary_search, brute_force]
);
