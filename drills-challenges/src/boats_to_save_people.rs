use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub num_people: usize,
    pub limit: i32,
}

impl_difficulty_vec!(Difficulty {
    num_people: usize = 64, 0..=1_000_000;
    limit: i32 = 100, 1..=30_000;
});

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub boats: Option<usize>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub people: Vec<i32>,
    pub limit: i32,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let people = (0..difficulty.num_people)
            .map(|_| rng.gen_range(1..=difficulty.limit))
            .collect();

        Ok(Self {
            seed: seed.clone(),
            people,
            limit: difficulty.limit,
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let expected = count_boats(&self.people, self.limit);
            if solution.boats != expected {
                return Err(anyhow!(
                    "Number of boats ({:?}) does not match expected ({:?})",
                    solution.boats,
                    expected
                ));
            }
            Ok(())
        }
    );
}

// The heaviest remaining person always leaves next; the lightest joins them if they fit.
fn count_boats(people: &[i32], limit: i32) -> Option<usize> {
    if people.iter().any(|&w| w > limit) {
        return None;
    }
    let mut queue: VecDeque<i32> = {
        let mut sorted = people.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.into()
    };
    let mut boats = 0;
    while let Some(heaviest) = queue.pop_front() {
        let fits = |&lightest: &i32| heaviest as i64 + lightest as i64 <= limit as i64;
        if queue.back().is_some_and(fits) {
            queue.pop_back();
        }
        boats += 1;
    }
    Some(boats)
}
