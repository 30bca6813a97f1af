use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub text_len: usize,
    pub num_words: usize,
    pub alphabet_size: u8,
}

impl_difficulty_vec!(Difficulty {
    text_len: usize = 50, 0..=5000;
    num_words: usize = 10, 0..=500;
    alphabet_size: u8 = 5, 1..=26;
});

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub extra: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub text: String,
    pub dictionary: Vec<String>,
}

fn random_word(rng: &mut SmallRng, len: usize, alphabet_size: u8) -> String {
    (0..len)
        .map(|_| (b'a' + rng.gen_range(0..alphabet_size)) as char)
        .collect()
}

impl Challenge {
    /// The text is mostly dictionary words glued together, salted with stray
    /// characters that no split can absorb.
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let dictionary: Vec<String> = (0..difficulty.num_words)
            .map(|_| {
                let len = rng.gen_range(1..=6);
                random_word(&mut rng, len, difficulty.alphabet_size)
            })
            .collect();

        let mut text = String::with_capacity(difficulty.text_len + 6);
        while text.len() < difficulty.text_len {
            if !dictionary.is_empty() && rng.gen_bool(0.7) {
                text.push_str(&dictionary[rng.gen_range(0..dictionary.len())]);
            } else {
                text.push_str(&random_word(&mut rng, 1, difficulty.alphabet_size));
            }
        }
        text.truncate(difficulty.text_len);

        Ok(Self {
            seed: seed.clone(),
            text,
            dictionary,
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let expected = fewest_leftover_chars(&self.text, &self.dictionary);
            if solution.extra != expected {
                return Err(anyhow!(
                    "Extra characters ({}) does not match expected ({})",
                    solution.extra,
                    expected
                ));
            }
            Ok(())
        }
    );
}

// best[i] is the answer for the first i chars
fn fewest_leftover_chars(text: &str, dictionary: &[String]) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let words: HashSet<Vec<char>> = dictionary.iter().map(|w| w.chars().collect()).collect();
    let mut best = vec![0usize; chars.len() + 1];
    for end in 1..=chars.len() {
        best[end] = best[end - 1] + 1;
        for start in 0..end {
            if words.contains(&chars[start..end]) {
                best[end] = best[end].min(best[start]);
            }
        }
    }
    best[chars.len()]
}
