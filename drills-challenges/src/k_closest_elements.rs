use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub num_values: usize,
    pub max_abs_value: i32,
}

impl_difficulty_vec!(Difficulty {
    num_values: usize = 32, 0..=1_000_000;
    max_abs_value: i32 = 100, 0..=10_000;
});

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub values: Vec<i32>,
}

/// `arr` is sorted ascending and may contain duplicates.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub arr: Vec<i32>,
    pub k: usize,
    pub x: i32,
}

/// Orders candidates by closeness to `x`; equally close values prefer the smaller.
pub fn closer(a: i32, b: i32, x: i32) -> std::cmp::Ordering {
    let da = (a as i64 - x as i64).abs();
    let db = (b as i64 - x as i64).abs();
    da.cmp(&db).then(a.cmp(&b))
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let max = difficulty.max_abs_value;
        let mut arr: Vec<i32> = (0..difficulty.num_values)
            .map(|_| rng.gen_range(-max..=max))
            .collect();
        arr.sort_unstable();
        // k may exceed the length, in which case the whole array is the answer
        let k = rng.gen_range(0..=arr.len() + 1);
        let x = rng.gen_range(-max - 10..=max + 10);

        Ok(Self {
            seed: seed.clone(),
            arr,
            k,
            x,
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let mut expected = self.arr.clone();
            expected.sort_by(|&a, &b| closer(a, b, self.x));
            expected.truncate(self.k);
            expected.sort_unstable();
            if solution.values != expected {
                return Err(anyhow!(
                    "Closest values {:?} do not match expected {:?}",
                    solution.values,
                    expected
                ));
            }
            Ok(())
        }
    );
}
