use anyhow::Result;
use drills_challenges::container_with_most_water::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        area: max_area(&challenge.heights),
    }))
}

/// Moving the taller line inwards can never increase the area, so only the
/// shorter one moves.
pub fn max_area(heights: &[i32]) -> i64 {
    if heights.len() < 2 {
        return 0;
    }
    let (mut left, mut right) = (0, heights.len() - 1);
    let mut best = 0i64;
    while left < right {
        let width = (right - left) as i64;
        let height = heights[left].min(heights[right]) as i64;
        best = best.max(width * height);
        if heights[left] < heights[right] {
            left += 1;
        } else {
            right -= 1;
        }
    }
    best
}
