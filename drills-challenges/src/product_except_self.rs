use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub num_values: usize,
    pub max_abs_value: i64,
}

impl_difficulty_vec!(Difficulty {
    num_values: usize = 32, 0..=1_000_000;
    max_abs_value: i64 = 30, 0..=1_000_000;
});

/// Products use wrapping `i64` arithmetic.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub products: Vec<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub nums: Vec<i64>,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let max = difficulty.max_abs_value;
        let nums = (0..difficulty.num_values)
            .map(|_| rng.gen_range(-max..=max))
            .collect();

        Ok(Self {
            seed: seed.clone(),
            nums,
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            if solution.products.len() != self.nums.len() {
                return Err(anyhow!(
                    "Expected {} products, got {}",
                    self.nums.len(),
                    solution.products.len()
                ));
            }
            // product of everything except i, built from the two sides of i
            let mut left = 1i64;
            let mut right_products = vec![1i64; self.nums.len() + 1];
            for i in (0..self.nums.len()).rev() {
                right_products[i] = right_products[i + 1].wrapping_mul(self.nums[i]);
            }
            for (i, &actual) in solution.products.iter().enumerate() {
                let expected = left.wrapping_mul(right_products[i + 1]);
                if actual != expected {
                    return Err(anyhow!(
                        "Product at index {} ({}) does not match expected ({})",
                        i,
                        actual,
                        expected
                    ));
                }
                left = left.wrapping_mul(self.nums[i]);
            }
            Ok(())
        }
    );
}
