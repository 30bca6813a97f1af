use crate::HashSet;
use anyhow::Result;
use drills_challenges::longest_substring::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        length: length_of_longest_substring(&challenge.text),
    }))
}

/// Sliding window holding its chars in a set; on a repeat the left edge
/// advances one char at a time until the repeat is gone.
pub fn length_of_longest_substring(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut window: HashSet<char> = HashSet::default();
    let mut left = 0;
    let mut best = 0;
    for right in 0..chars.len() {
        while !window.insert(chars[right]) {
            window.remove(&chars[left]);
            left += 1;
        }
        best = best.max(right + 1 - left);
    }
    best
}
