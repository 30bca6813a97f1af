use anyhow::Result;
use drills_challenges::longest_substring::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        length: length_of_longest_substring(&challenge.text),
    }))
}

pub fn length_of_longest_substring(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut best = 0;
    for start in 0..chars.len() {
        let mut end = start;
        while end < chars.len() && !chars[start..end].contains(&chars[end]) {
            end += 1;
        }
        best = best.max(end - start);
    }
    best
}
