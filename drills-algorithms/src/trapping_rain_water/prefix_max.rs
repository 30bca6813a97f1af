use anyhow::Result;
use drills_challenges::trapping_rain_water::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        water: trap(&challenge.heights),
    }))
}

pub fn trap(heights: &[i32]) -> i64 {
    let n = heights.len();
    let mut left_max = vec![0i64; n];
    let mut right_max = vec![0i64; n];
    let mut running = i64::MIN;
    for i in 0..n {
        running = running.max(heights[i] as i64);
        left_max[i] = running;
    }
    running = i64::MIN;
    for i in (0..n).rev() {
        running = running.max(heights[i] as i64);
        right_max[i] = running;
    }
    (0..n)
        .map(|i| left_max[i].min(right_max[i]) - heights[i] as i64)
        .sum()
}
