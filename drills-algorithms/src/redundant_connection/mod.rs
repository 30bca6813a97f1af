use drills_challenges::redundant_connection::{Challenge, Solution};

pub mod dfs_connectivity;
pub mod union_find;

register_algorithms!(recommended: union_find, [union_find, dfs_connectivity]);
