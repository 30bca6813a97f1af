use super::floor_char_boundary;
use anyhow::Result;
use drills_challenges::longest_common_prefix::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        prefix: longest_common_prefix(&challenge.strings),
    }))
}

/// Binary searches the prefix length: if every string starts with the first
/// `mid` bytes of the shortest, the answer is at least `mid`.
pub fn longest_common_prefix(strs: &[String]) -> String {
    let Some(shortest) = strs.iter().min_by_key(|s| s.len()) else {
        return String::new();
    };
    let shares = |len: usize| {
        let prefix = &shortest.as_bytes()[..len];
        strs.iter().all(|s| s.as_bytes().starts_with(prefix))
    };
    let (mut lo, mut hi) = (0, shortest.len());
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if shares(mid) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    shortest[..floor_char_boundary(shortest, lo)].to_string()
}
