use anyhow::Result;
use drills_challenges::search_2d_matrix::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        found: search_matrix(&challenge.matrix, challenge.target),
    }))
}

/// Picks the last row starting at or below `target`, then searches inside it.
/// Empty rows are skipped.
pub fn search_matrix(matrix: &[Vec<i32>], target: i32) -> bool {
    let rows: Vec<&[i32]> = matrix
        .iter()
        .filter(|row| !row.is_empty())
        .map(Vec::as_slice)
        .collect();
    let candidate = rows.partition_point(|row| row[0] <= target);
    candidate > 0 && rows[candidate - 1].binary_search(&target).is_ok()
}
