use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub max_n: usize,
}

impl_difficulty_vec!(Difficulty {
    max_n: usize = 10, 0..=20;
});

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub combinations: Vec<Vec<i32>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub n: usize,
    pub k: usize,
}

pub fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1u128, |acc, i| acc * (n - i) as u128 / (i + 1) as u128)
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let n = rng.gen_range(0..=difficulty.max_n);
        // occasionally ask for more than n so the empty case is exercised
        let k = rng.gen_range(0..=n + 1);

        Ok(Self {
            seed: seed.clone(),
            n,
            k,
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let expected = binomial(self.n, self.k);
            if solution.combinations.len() as u128 != expected {
                return Err(anyhow!(
                    "Number of combinations ({}) does not match C({}, {}) = {}",
                    solution.combinations.len(),
                    self.n,
                    self.k,
                    expected
                ));
            }
            for (i, combination) in solution.combinations.iter().enumerate() {
                if combination.len() != self.k {
                    return Err(anyhow!(
                        "Combination {} has {} elements, expected {}",
                        i,
                        combination.len(),
                        self.k
                    ));
                }
                if combination
                    .iter()
                    .any(|&v| v < 1 || v as usize > self.n)
                {
                    return Err(anyhow!("Combination {} has values outside 1..={}", i, self.n));
                }
                if combination.windows(2).any(|w| w[0] >= w[1]) {
                    return Err(anyhow!("Combination {} is not strictly increasing", i));
                }
            }
            // strictly increasing order also rules out duplicates
            if let Some(i) = solution
                .combinations
                .windows(2)
                .position(|w| w[0] >= w[1])
            {
                return Err(anyhow!(
                    "Combinations {} and {} are not in lexicographic order",
                    i,
                    i + 1
                ));
            }
            Ok(())
        }
    );
}
