use super::floor_char_boundary;
use anyhow::Result;
use drills_challenges::longest_common_prefix::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        prefix: longest_common_prefix(&challenge.strings),
    }))
}

/// Compares column by column across all strings and stops at the first
/// mismatch or at the end of the shortest string.
pub fn longest_common_prefix(strs: &[String]) -> String {
    let Some((first, rest)) = strs.split_first() else {
        return String::new();
    };
    let len = first
        .bytes()
        .enumerate()
        .take_while(|&(i, b)| rest.iter().all(|s| s.as_bytes().get(i) == Some(&b)))
        .count();
    first[..floor_char_boundary(first, len)].to_string()
}
