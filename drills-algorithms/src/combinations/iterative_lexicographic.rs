use anyhow::Result;
use drills_challenges::combinations::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        combinations: combine(challenge.n, challenge.k),
    }))
}

/// Steps through combinations in order by bumping the rightmost position
/// that still has room and resetting everything after it.
pub fn combine(n: usize, k: usize) -> Vec<Vec<i32>> {
    if k > n {
        return Vec::new();
    }
    let mut current: Vec<usize> = (1..=k).collect();
    let mut output = Vec::new();
    loop {
        output.push(current.iter().map(|&v| v as i32).collect());
        let Some(i) = (0..k).rev().find(|&i| current[i] < n - k + i + 1) else {
            break;
        };
        current[i] += 1;
        for j in i + 1..k {
            current[j] = current[j - 1] + 1;
        }
    }
    output
}
