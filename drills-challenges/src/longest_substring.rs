use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub text_len: usize,
    pub alphabet_size: u8,
}

impl_difficulty_vec!(Difficulty {
    text_len: usize = 64, 0..=1_000_000;
    alphabet_size: u8 = 8, 1..=26;
});

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub length: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub text: String,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let text = (0..difficulty.text_len)
            .map(|_| (b'a' + rng.gen_range(0..difficulty.alphabet_size)) as char)
            .collect();

        Ok(Self {
            seed: seed.clone(),
            text,
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let expected = longest_distinct_run(&self.text);
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

// Extend from every start until a repeat; a run never exceeds the number of
// distinct chars, which bounds the inner loop.
fn longest_distinct_run(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut best = 0;
    for start in 0..chars.len() {
        let mut seen = std::collections::HashSet::new();
        let run = chars[start..]
            .iter()
            .take_while(|&&c| seen.insert(c))
            .count();
        best = best.max(run);
    }
    best
}
