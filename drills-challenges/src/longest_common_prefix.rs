use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub num_strings: usize,
    pub max_len: usize,
}

impl_difficulty_vec!(Difficulty {
    num_strings: usize = 8, 0..=10_000;
    max_len: usize = 12, 0..=1000;
});

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub prefix: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub strings: Vec<String>,
}

fn letter(rng: &mut SmallRng) -> char {
    (b'a' + rng.gen_range(0..3u8)) as char
}

impl Challenge {
    /// Every string starts with a shared random stem and continues with a
    /// suffix over `a..=c`, so the true prefix often runs past the stem.
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let stem_len = rng.gen_range(0..=difficulty.max_len);
        let stem: String = (0..stem_len).map(|_| letter(&mut rng)).collect();
        let strings = (0..difficulty.num_strings)
            .map(|_| {
                let suffix_len = rng.gen_range(0..=difficulty.max_len - stem_len);
                let suffix: String = (0..suffix_len).map(|_| letter(&mut rng)).collect();
                format!("{}{}", stem, suffix)
            })
            .collect();

        Ok(Self {
            seed: seed.clone(),
            strings,
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let expected = char_by_char_prefix(&self.strings);
            if solution.prefix != expected {
                return Err(anyhow!(
                    "Prefix ({:?}) does not match expected ({:?})",
                    solution.prefix,
                    expected
                ));
            }
            Ok(())
        }
    );
}

fn char_by_char_prefix(strings: &[String]) -> String {
    let Some(first) = strings.first() else {
        return String::new();
    };
    let mut iters: Vec<_> = strings[1..].iter().map(|s| s.chars()).collect();
    first
        .chars()
        .take_while(|&c| iters.iter_mut().all(|it| it.next() == Some(c)))
        .collect()
}
