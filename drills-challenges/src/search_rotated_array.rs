use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
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
    pub index: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub nums: Vec<i32>,
    pub target: i32,
}

/// Strictly increasing values rotated left by a random amount.
pub fn rotated_sorted_values(rng: &mut SmallRng, num_values: usize) -> Vec<i32> {
    let mut value: i32 = rng.gen_range(-10_000..=10_000);
    let mut nums: Vec<i32> = (0..num_values)
        .map(|_| {
            value += rng.gen_range(1..=3);
            value
        })
        .collect();
    if !nums.is_empty() {
        let pivot = rng.gen_range(0..nums.len());
        nums.rotate_left(pivot);
    }
    nums
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let nums = rotated_sorted_values(&mut rng, difficulty.num_values);
        let target = match (nums.iter().min(), nums.iter().max()) {
            (Some(_), Some(_)) if rng.gen_bool(0.5) => nums[rng.gen_range(0..nums.len())],
            (Some(&lo), Some(&hi)) => rng.gen_range(lo - 3..=hi + 3),
            _ => rng.gen_range(-10..=10),
        };

        Ok(Self {
            seed: seed.clone(),
            nums,
            target,
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let expected = self
                .nums
                .iter()
                .position(|&v| v == self.target)
                .map_or(-1, |i| i as i32);
            if solution.index != expected {
                return Err(anyhow!(
                    "Index ({}) for target {} does not match expected ({})",
                    solution.index,
                    self.target,
                    expected
                ));
            }
            Ok(())
        }
    );
}
