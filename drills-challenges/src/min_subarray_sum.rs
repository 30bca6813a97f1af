use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub num_values: usize,
    pub max_value: i32,
}

impl_difficulty_vec!(Difficulty {
    num_values: usize = 64, 0..=1_000_000;
    max_value: i32 = 100, 1..=10_000;
});

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub length: usize,
}

/// All `nums` are positive.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub target: i64,
    pub nums: Vec<i32>,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let nums: Vec<i32> = (0..difficulty.num_values)
            .map(|_| rng.gen_range(1..=difficulty.max_value))
            .collect();
        let total: i64 = nums.iter().map(|&v| v as i64).sum();
        // up to 10% past the total so some instances have no answer
        let target = rng.gen_range(1..=(total + total / 10).max(1));

        Ok(Self {
            seed: seed.clone(),
            target,
            nums,
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let expected = shortest_window(self.target, &self.nums);
            if solution.length != expected {
                return Err(anyhow!(
                    "Length ({}) does not match expected ({})",
                    solution.length,
                    expected
                ));
            }
            Ok(())
        }
    );
}

// Binary search on the window length: if some window of length L reaches the
// target, so does some window of every length above L.
fn shortest_window(target: i64, nums: &[i32]) -> usize {
    let mut prefix = vec![0i64; nums.len() + 1];
    for (i, &v) in nums.iter().enumerate() {
        prefix[i + 1] = prefix[i] + v as i64;
    }
    let reaches = |len: usize| (len..=nums.len()).any(|end| prefix[end] - prefix[end - len] >= target);

    if nums.is_empty() || !reaches(nums.len()) {
        return 0;
    }
    let (mut lo, mut hi) = (1, nums.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if reaches(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}
