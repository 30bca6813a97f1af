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

/// Starts in the top-right corner and steps left while the value is too big,
/// down while it is too small. O(rows + cols). Ragged matrices give `false`.
pub fn search_matrix(matrix: &[Vec<i32>], target: i32) -> bool {
    if !is_rectangular(matrix) {
        return false;
    }
    let mut col = usize::MAX;
    for row in matrix {
        let Some(last) = row.len().checked_sub(1) else {
            continue;
        };
        col = col.min(last);
        loop {
            match row[col].cmp(&target) {
                std::cmp::Ordering::Equal => return true,
                std::cmp::Ordering::Less => break,
                std::cmp::Ordering::Greater if col == 0 => return false,
                std::cmp::Ordering::Greater => col -= 1,
            }
        }
    }
    false
}
