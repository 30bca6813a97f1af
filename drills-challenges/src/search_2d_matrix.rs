use anyhow::{anyhow, Result};
use ndarray::{Array2, Axis};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub num_rows: usize,
    pub num_cols: usize,
}

impl_difficulty_vec!(Difficulty {
    num_rows: usize = 8, 0..=1000;
    num_cols: usize = 8, 0..=1000;
});

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub found: bool,
}

/// Rows are sorted ascending and each row starts above the previous row's
/// last value, so the matrix read row by row is strictly increasing.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub matrix: Vec<Vec<i32>>,
    pub target: i32,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let start: i32 = rng.gen_range(-1000..=0);
        let steps = Array2::from_shape_fn((difficulty.num_rows, difficulty.num_cols), |_| {
            rng.gen_range(1..=4)
        });

        let mut value = start;
        let matrix: Vec<Vec<i32>> = steps
            .axis_iter(Axis(0))
            .map(|row| {
                row.iter()
                    .map(|&step| {
                        value += step;
                        value
                    })
                    .collect()
            })
            .collect();

        let target = if !steps.is_empty() && rng.gen_bool(0.5) {
            let row = rng.gen_range(0..difficulty.num_rows);
            matrix[row][rng.gen_range(0..difficulty.num_cols)]
        } else {
            rng.gen_range(start - 5..=value + 5)
        };

        Ok(Self {
            seed: seed.clone(),
            matrix,
            target,
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let expected = self.matrix.iter().flatten().any(|&v| v == self.target);
            if solution.found != expected {
                return Err(anyhow!(
                    "Reported found = {} for target {}, expected {}",
                    solution.found,
                    self.target,
                    expected
                ));
            }
            Ok(())
        }
    );
}
