use anyhow::{anyhow, Result};
use ndarray::{Array2, Axis};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub num_rows: usize,
    pub num_cols: usize,
    pub land_percent: u32,
}

impl_difficulty_vec!(Difficulty {
    num_rows: usize = 8, 0..=1000;
    num_cols: usize = 8, 0..=1000;
    land_percent: u32 = 45, 0..=100;
});

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub islands: usize,
}

/// `true` is land. Rows may be ragged; missing cells are water.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub grid: Vec<Vec<bool>>,
}

/// Land cells 4-adjacent to `(r, c)`.
pub fn land_neighbours(
    grid: &[Vec<bool>],
    r: usize,
    c: usize,
) -> impl Iterator<Item = (usize, usize)> + '_ {
    [(r.wrapping_sub(1), c), (r + 1, c), (r, c.wrapping_sub(1)), (r, c + 1)]
        .into_iter()
        .filter(move |&(r, c)| is_land(grid, r, c))
}

pub fn is_land(grid: &[Vec<bool>], r: usize, c: usize) -> bool {
    grid.get(r).and_then(|row| row.get(c)).copied().unwrap_or(false)
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let p = difficulty.land_percent as f64 / 100.0;
        let cells = Array2::from_shape_fn((difficulty.num_rows, difficulty.num_cols), |_| {
            rng.gen_bool(p)
        });
        let grid = cells
            .axis_iter(Axis(0))
            .map(|row| row.to_vec())
            .collect();

        Ok(Self {
            seed: seed.clone(),
            grid,
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let expected = count_by_labelling(&self.grid);
            if solution.islands != expected {
                return Err(anyhow!(
                    "Number of islands ({}) does not match expected ({})",
                    solution.islands,
                    expected
                ));
            }
            Ok(())
        }
    );
}

// Labels each land cell with its island id via an explicit work list.
fn count_by_labelling(grid: &[Vec<bool>]) -> usize {
    let mut label: Vec<Vec<Option<usize>>> = grid.iter().map(|row| vec![None; row.len()]).collect();
    let mut islands = 0;
    for r in 0..grid.len() {
        for c in 0..grid[r].len() {
            if !grid[r][c] || label[r][c].is_some() {
                continue;
            }
            label[r][c] = Some(islands);
            let mut work = vec![(r, c)];
            while let Some((r, c)) = work.pop() {
                for (nr, nc) in land_neighbours(grid, r, c) {
                    if label[nr][nc].is_none() {
                        label[nr][nc] = Some(islands);
                        work.push((nr, nc));
                    }
                }
            }
            islands += 1;
        }
    }
    islands
}
