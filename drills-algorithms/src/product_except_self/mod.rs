use drills_challenges::product_except_self::{Challenge, Solution};

pub mod brute_force;
pub mod left_right_arrays;
pub mod prefix_suffix;

register_algorithms!(
    recommended: prefix_suffix,
    [prefix_suffix, left_right_arrays, brute_force]
);
