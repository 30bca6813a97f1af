use drills_challenges::trapping_rain_water::{Challenge, Solution};

pub mod brute_force;
pub mod monotonic_stack;
pub mod prefix_max;
pub mod two_pointers;

register_algorithms!(
    recommended: two_pointers,
    [two_pointers, prefix_max, monotonic_stack, brute_force]
);
