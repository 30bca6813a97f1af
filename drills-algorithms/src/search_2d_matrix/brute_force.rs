use anyhow::Result;
use drills_challenges::search_2d_matrix::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        found: search_matrix(&challenge.matrix, challenge.target),
    }))
}

pub fn search_matrix(matrix: &[Vec<i32>], target: i32) -> bool {
    matrix.iter().flatten().any(|&v| v == target)
}
