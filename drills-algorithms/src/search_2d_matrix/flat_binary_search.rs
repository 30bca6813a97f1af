use super::is_rectangular;
use anyhow::Result;
use drills_challenges::search_2d_matrix::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    if !is_rectangular(&challenge.matrix) {
        return Ok(None);
    }
    Ok(Some(Solution {
        found: search_matrix(&challenge.matrix, challenge.target),
    }))
}

/// Treats the rows as one sorted array of `rows * cols` values and binary
/// searches it. A ragged matrix cannot be indexed this way and gives `false`.
pub fn search_matrix(matrix: &[Vec<i32>], target: i32) -> bool {
    if !is_rectangular(matrix) {
        return false;
    }
    let cols = matrix.first().map_or(0, Vec::len);
    let (mut lo, mut hi) = (0, matrix.len() * cols);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let value = matrix[mid / cols][mid % cols];
        if value == target {
            return true;
        }
        if value < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    false
}
