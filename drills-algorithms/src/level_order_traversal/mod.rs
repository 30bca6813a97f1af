use drills_challenges::level_order_traversal::{Challenge, Solution};

pub mod dfs_by_depth;
pub mod queue_bfs;

register_algorithms!(recommended: queue_bfs, [queue_bfs, dfs_by_depth]);
