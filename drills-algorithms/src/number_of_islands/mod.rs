use drills_challenges::number_of_islands::{Challenge, Solution};

pub mod bfs;
pub mod dfs;
pub mod union_find;

register_algorithms!(recommended: bfs, [bfs, dfs, union_find]);
