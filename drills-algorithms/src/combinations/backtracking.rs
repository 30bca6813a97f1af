use anyhow::Result;
use drills_challenges::combinations::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        combinations: combine(challenge.n, challenge.k),
    }))
}

/// All `k`-element subsets of `1..=n`, each ascending, in lexicographic order.
pub fn combine(n: usize, k: usize) -> Vec<Vec<i32>> {
    let mut output = Vec::new();
    if k > n {
        return output;
    }
    let mut current = Vec::with_capacity(k);
    extend(1, n, k, &mut current, &mut output);
    output
}

fn extend(start: usize, n: usize, k: usize, current: &mut Vec<i32>, output: &mut Vec<Vec<i32>>) {
    if current.len() == k {
        output.push(current.clone());
        return;
    }
    // stop once too few values remain to fill the combination
    let last_start = n + 1 - (k - current.len());
    for v in start..=last_start {
        current.push(v as i32);
        extend(v + 1, n, k, current, output);
        current.pop();
    }
}
