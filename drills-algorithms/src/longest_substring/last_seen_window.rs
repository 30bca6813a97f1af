use crate::{seeded_hasher, HashMap};
use anyhow::Result;
use drills_challenges::longest_substring::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    let last_seen = HashMap::with_hasher(seeded_hasher(&challenge.seed));
    Ok(Some(Solution {
        length: longest_run(&challenge.text, last_seen),
    }))
}

/// Length in chars of the longest substring without a repeated char.
pub fn length_of_longest_substring(text: &str) -> usize {
    longest_run(text, HashMap::default())
}

// On a repeat the window start jumps past the previous occurrence in one step.
fn longest_run(text: &str, mut last_seen: HashMap<char, usize>) -> usize {
    let mut start = 0;
    let mut best = 0;
    for (i, c) in text.chars().enumerate() {
        if let Some(prev) = last_seen.insert(c, i) {
            start = start.max(prev + 1);
        }
        best = best.max(i + 1 - start);
    }
    best
}
