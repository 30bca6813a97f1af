use drills_challenges::find_min_rotated::{Challenge, Solution};

pub mod binary_search;
pub mod linear_scan;

register_algorithms!(recommended: binary_search, [binary_search, linear_scan]);
