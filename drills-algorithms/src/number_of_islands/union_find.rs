use anyhow::Result;
use drills_challenges::number_of_islands::*;
use drills_utils::UnionFind;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        islands: num_islands(&challenge.grid),
    }))
}

/// Unions every land cell with its land neighbours below and to the right.
/// Water cells stay singleton sets and are subtracted at the end.
pub fn num_islands(grid: &[Vec<bool>]) -> usize {
    let offsets: Vec<usize> = grid
        .iter()
        .scan(0, |next, row| {
            let offset = *next;
            *next += row.len();
            Some(offset)
        })
        .collect();
    let num_cells: usize = grid.iter().map(Vec::len).sum();
    let num_water = num_cells - grid.iter().flatten().filter(|&&land| land).count();

    let mut uf = UnionFind::new(num_cells);
    for (r, row) in grid.iter().enumerate() {
        for (c, &land) in row.iter().enumerate() {
            if !land {
                continue;
            }
            if is_land(grid, r, c + 1) {
                uf.union(offsets[r] + c, offsets[r] + c + 1);
            }
            if is_land(grid, r + 1, c) {
                uf.union(offsets[r] + c, offsets[r + 1] + c);
            }
        }
    }
    uf.num_sets() - num_water
}
