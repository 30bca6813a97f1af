use anyhow::Result;
use drills_challenges::number_of_islands::*;
use std::collections::VecDeque;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        islands: num_islands(&challenge.grid),
    }))
}

/// Counts 4-connected groups of land. Each unvisited land cell starts a
/// flood fill that marks its whole island.
pub fn num_islands(grid: &[Vec<bool>]) -> usize {
    let mut visited: Vec<Vec<bool>> = grid.iter().map(|row| vec![false; row.len()]).collect();
    let mut islands = 0;
    let mut queue = VecDeque::new();
    for r in 0..grid.len() {
        for c in 0..grid[r].len() {
            if !grid[r][c] || visited[r][c] {
                continue;
            }
            islands += 1;
            visited[r][c] = true;
            queue.push_back((r, c));
            while let Some((r, c)) = queue.pop_front() {
                for (nr, nc) in land_neighbours(grid, r, c) {
                    if !visited[nr][nc] {
                        visited[nr][nc] = true;
                        queue.push_back((nr, nc));
                    }
                }
            }
        }
    }
    islands
}
