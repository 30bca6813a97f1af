use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Number of distinct n-queens placements for `n = 0..=14`.
pub const KNOWN_COUNTS: [usize; 15] = [
    1, 1, 0, 0, 2, 10, 4, 40, 92, 352, 724, 2680, 14200, 73712, 365596,
];

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub max_n: usize,
}

impl_difficulty_vec!(Difficulty {
    max_n: usize = 8, 0..=14;
});

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub n: usize,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        Ok(Self {
            seed: seed.clone(),
            n: rng.gen_range(0..=difficulty.max_n),
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let expected = *KNOWN_COUNTS
                .get(self.n)
                .ok_or_else(|| anyhow!("No known count for n = {}", self.n))?;
            if solution.count != expected {
                return Err(anyhow!(
                    "Count ({}) does not match expected ({}) for n = {}",
                    solution.count,
                    expected,
                    self.n
                ));
            }
            Ok(())
        }
    );
}
