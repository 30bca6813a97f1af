use anyhow::Result;
use drills_challenges::n_queens_ii::*;

const MAX_N: usize = 9;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    if challenge.n > MAX_N {
        return Ok(None);
    }
    Ok(Some(Solution {
        count: total_n_queens(challenge.n),
    }))
}

/// Tries every column permutation (one queen per row and column) and keeps
/// those without a shared diagonal. O(n! * n^2).
pub fn total_n_queens(n: usize) -> usize {
    let mut columns: Vec<usize> = (0..n).collect();
    let mut total = 0;
    loop {
        if no_shared_diagonal(&columns) {
            total += 1;
        }
        if !next_permutation(&mut columns) {
            break;
        }
    }
    total
}

fn no_shared_diagonal(columns: &[usize]) -> bool {
    (0..columns.len()).all(|i| {
        (i + 1..columns.len()).all(|j| columns[i].abs_diff(columns[j]) != j - i)
    })
}

fn next_permutation(values: &mut [usize]) -> bool {
    let Some(i) = (1..values.len()).rev().find(|&i| values[i - 1] < values[i]) else {
        return false;
    };
    let j = (i..values.len())
        .rev()
        .find(|&j| values[j] > values[i - 1])
        .unwrap_or(i);
    values.swap(i - 1, j);
    values[i..].reverse();
    true
}
