use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub num_bars: usize,
    pub max_height: i32,
}

impl_difficulty_vec!(Difficulty {
    num_bars: usize = 64, 0..=1_000_000;
    max_height: i32 = 100, 0..=100_000;
});

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub water: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub heights: Vec<i32>,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let heights = (0..difficulty.num_bars)
            .map(|_| rng.gen_range(0..=difficulty.max_height))
            .collect();

        Ok(Self {
            seed: seed.clone(),
            heights,
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let expected = water_above_each_bar(&self.heights).sum::<i64>();
            if solution.water != expected {
                return Err(anyhow!(
                    "Trapped water ({}) does not match expected ({})",
                    solution.water,
                    expected
                ));
            }
            Ok(())
        }
    );
}

// Water above bar i is bounded by the tallest bar on each side.
fn water_above_each_bar(heights: &[i32]) -> impl Iterator<Item = i64> + '_ {
    let mut right_max = vec![0i64; heights.len()];
    let mut running = i64::MIN;
    for (i, &h) in heights.iter().enumerate().rev() {
        running = running.max(h as i64);
        right_max[i] = running;
    }
    let mut left_max = i64::MIN;
    heights.iter().zip(right_max).map(move |(&h, right)| {
        left_max = left_max.max(h as i64);
        left_max.min(right) - h as i64
    })
}
