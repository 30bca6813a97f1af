use drills_challenges::container_with_most_water::{Challenge, Solution};

pub mod brute_force;
pub mod two_pointers;

register_algorithms!(recommended: two_pointers, [two_pointers, brute_force]);
