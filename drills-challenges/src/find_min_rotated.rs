use crate::search_rotated_array::rotated_sorted_values;
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub num_values: usize,
}

impl_difficulty_vec!(Difficulty {
    num_values: usize = 32, 0..=1_000_000;
});

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub min: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub nums: Vec<i32>,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        Ok(Self {
            seed: seed.clone(),
            nums: rotated_sorted_values(&mut rng, difficulty.num_values),
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let expected = self.nums.iter().copied().min();
            if solution.min != expected {
                return Err(anyhow!(
                    "Minimum ({:?}) does not match expected ({:?})",
                    solution.min,
                    expected
                ));
            }
            Ok(())
        }
    );
}
