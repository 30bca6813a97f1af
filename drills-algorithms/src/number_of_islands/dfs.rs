use anyhow::Result;
use drills_challenges::number_of_islands::*;
use ndarray::Array2;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        islands: num_islands(&challenge.grid),
    }))
}

/// Flood fill with an explicit stack. Visited cells are tracked in a dense
/// array as wide as the widest row.
pub fn num_islands(grid: &[Vec<bool>]) -> usize {
    let width = grid.iter().map(Vec::len).max().unwrap_or(0);
    let mut visited = Array2::<bool>::default((grid.len(), width));
    let mut islands = 0;
    let mut stack = Vec::new();
    for (r, row) in grid.iter().enumerate() {
        for (c, &land) in row.iter().enumerate() {
            if !land || visited[[r, c]] {
                continue;
            }
            islands += 1;
            visited[[r, c]] = true;
            stack.push((r, c));
            while let Some((r, c)) = stack.pop() {
                for (nr, nc) in land_neighbours(grid, r, c) {
                    if !visited[[nr, nc]] {
                        visited[[nr, nc]] = true;
                        stack.push((nr, nc));
                    }
                }
            }
        }
    }
    islands
}
