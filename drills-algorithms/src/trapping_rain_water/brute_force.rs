use anyhow::Result;
use drills_challenges::trapping_rain_water::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        water: trap(&challenge.heights),
    }))
}

// O(n^2)
pub fn trap(heights: &[i32]) -> i64 {
    (0..heights.len())
        .map(|i| {
            let left = heights[..=i].iter().max().copied().unwrap_or(heights[i]);
            let right = heights[i..].iter().max().copied().unwrap_or(heights[i]);
            left.min(right) as i64 - heights[i] as i64
        })
        .sum()
}
