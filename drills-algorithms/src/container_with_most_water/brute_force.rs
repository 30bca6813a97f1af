use anyhow::Result;
use drills_challenges::container_with_most_water::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        area: max_area(&challenge.heights),
    }))
}

pub fn max_area(heights: &[i32]) -> i64 {
    let mut best = 0i64;
    for i in 0..heights.len() {
        for j in i + 1..heights.len() {
            best = best.max((j - i) as i64 * heights[i].min(heights[j]) as i64);
        }
    }
    best
}
