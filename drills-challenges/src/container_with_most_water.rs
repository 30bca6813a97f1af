use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub num_lines: usize,
    pub max_height: i32,
}

impl_difficulty_vec!(Difficulty {
    num_lines: usize = 64, 0..=1_000_000;
    max_height: i32 = 1000, 0..=100_000;
});

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub area: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub heights: Vec<i32>,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let heights = (0..difficulty.num_lines)
            .map(|_| rng.gen_range(0..=difficulty.max_height))
            .collect();

        Ok(Self {
            seed: seed.clone(),
            heights,
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let expected = max_area_by_height(&self.heights);
            if solution.area != expected {
                return Err(anyhow!(
                    "Area ({}) does not match expected ({})",
                    solution.area,
                    expected
                ));
            }
            Ok(())
        }
    );
}

// When line i is the shorter side, the best partner is the farthest line at
// least as tall. Visit heights tallest first, tracking the index span seen.
fn max_area_by_height(heights: &[i32]) -> i64 {
    let mut order: Vec<usize> = (0..heights.len()).collect();
    order.sort_by(|&a, &b| heights[b].cmp(&heights[a]));

    let mut best = 0i64;
    let mut lo = usize::MAX;
    let mut hi = 0usize;
    let mut start = 0;
    while start < order.len() {
        let h = heights[order[start]];
        let mut end = start;
        while end < order.len() && heights[order[end]] == h {
            lo = lo.min(order[end]);
            hi = hi.max(order[end]);
            end += 1;
        }
        for &i in &order[start..end] {
            let width = (i - lo).max(hi - i) as i64;
            best = best.max(width * h as i64);
        }
        start = end;
    }
    best
}
