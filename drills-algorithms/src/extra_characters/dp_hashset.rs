use crate::HashSet;
use anyhow::Result;
use drills_challenges::extra_characters::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        extra: min_extra_char(&challenge.text, &challenge.dictionary),
    }))
}

/// Left-to-right DP over char positions with the dictionary in a hash set.
/// Only substrings up to the longest word are looked up.
pub fn min_extra_char(text: &str, dictionary: &[String]) -> usize {
    let words: HashSet<&str> = dictionary.iter().map(String::as_str).collect();
    let longest = dictionary.iter().map(|w| w.chars().count()).max().unwrap_or(0);

    let mut bounds: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    bounds.push(text.len());
    let num_chars = bounds.len() - 1;

    let mut best = vec![0usize; num_chars + 1];
    for end in 1..=num_chars {
        best[end] = best[end - 1] + 1;
        for start in end.saturating_sub(longest)..end {
            if words.contains(&text[bounds[start]..bounds[end]]) {
                best[end] = best[end].min(best[start]);
            }
        }
    }
    best[num_chars]
}
