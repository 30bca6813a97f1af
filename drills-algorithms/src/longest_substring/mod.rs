use drills_challenges::longest_substring::{Challenge, Solution};

pub mod brute_force;
pub mod last_seen_window;
pub mod set_window;

register_algorithms!(
    recommended: last_seen_window,
    [last_seen_window, set_window, brute_force]
);
