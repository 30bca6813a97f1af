use drills_challenges::open_the_lock::{Challenge, Solution};

pub mod bfs;
pub mod bfs_dense;
pub mod bidirectional_bfs;

register_algorithms!(recommended: bfs, [bfs, bidirectional_bfs, bfs_dense]);
