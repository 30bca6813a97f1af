use anyhow::Result;
use drills_challenges::combinations::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    // masks are u32
    if challenge.n > 31 {
        return Ok(None);
    }
    Ok(Some(Solution {
        combinations: combine(challenge.n, challenge.k),
    }))
}

/// Enumerates every mask with `k` bits set, then sorts into lexicographic order.
pub fn combine(n: usize, k: usize) -> Vec<Vec<i32>> {
    if k > n || n > 31 {
        return Vec::new();
    }
    let mut output: Vec<Vec<i32>> = (0u32..1 << n)
        .filter(|mask| mask.count_ones() as usize == k)
        .map(|mask| {
            (0..n)
                .filter(|&bit| mask & (1 << bit) != 0)
                .map(|bit| bit as i32 + 1)
                .collect()
        })
        .collect();
    output.sort_unstable();
    output
}
