use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const NUM_WHEELS: usize = 4;
pub const NUM_STATES: usize = 10_000;
pub const START: &str = "0000";

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub num_deadends: usize,
}

impl_difficulty_vec!(Difficulty {
    num_deadends: usize = 20, 0..=5000;
});

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub turns: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub deadends: Vec<String>,
    pub target: String,
}

/// Parses a 4-digit wheel code into `0..10_000`.
pub fn parse_code(code: &str) -> Option<usize> {
    if code.len() != NUM_WHEELS {
        return None;
    }
    code.bytes().try_fold(0usize, |acc, b| {
        b.is_ascii_digit().then(|| acc * 10 + (b - b'0') as usize)
    })
}

pub fn format_code(state: usize) -> String {
    format!("{:04}", state % NUM_STATES)
}

/// The eight states one wheel turn away from `state`.
pub fn neighbours(state: usize) -> impl Iterator<Item = usize> {
    (0..NUM_WHEELS).flat_map(move |wheel| {
        let place = 10usize.pow(wheel as u32);
        let digit = (state / place) % 10;
        let base = state - digit * place;
        [(digit + 1) % 10, (digit + 9) % 10]
            .into_iter()
            .map(move |d| base + d * place)
    })
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let target = rng.gen_range(0..NUM_STATES);
        let mut states: Vec<usize> = (0..NUM_STATES).filter(|&s| s != target).collect();
        states.shuffle(&mut rng);
        let deadends = states
            .into_iter()
            .take(difficulty.num_deadends)
            .map(format_code)
            .collect();

        Ok(Self {
            seed: seed.clone(),
            deadends,
            target: format_code(target),
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let expected = shortest_turns(&self.deadends, &self.target);
            if solution.turns != expected {
                return Err(anyhow!(
                    "Number of turns ({}) does not match expected ({})",
                    solution.turns,
                    expected
                ));
            }
            Ok(())
        }
    );
}

fn shortest_turns(deadends: &[String], target: &str) -> i32 {
    let Some(target) = parse_code(target) else {
        return -1;
    };
    let mut distance = vec![-1i32; NUM_STATES];
    let mut blocked = vec![false; NUM_STATES];
    for state in deadends.iter().filter_map(|d| parse_code(d)) {
        blocked[state] = true;
    }
    if blocked[0] {
        return -1;
    }
    distance[0] = 0;
    let mut queue = VecDeque::from([0usize]);
    while let Some(state) = queue.pop_front() {
        for next in neighbours(state) {
            if !blocked[next] && distance[next] < 0 {
                distance[next] = distance[state] + 1;
                queue.push_back(next);
            }
        }
    }
    distance[target]
}
