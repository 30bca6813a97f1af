use anyhow::Result;
use drills_challenges::trapping_rain_water::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        water: trap(&challenge.heights),
    }))
}

/// Fills water layer by layer. The stack holds indices of bars with
/// non-increasing heights; a taller bar closes a basin over the popped one.
pub fn trap(heights: &[i32]) -> i64 {
    let mut stack: Vec<usize> = Vec::with_capacity(heights.len());
    let mut water = 0i64;
    for (i, &h) in heights.iter().enumerate() {
        while let Some(&top) = stack.last() {
            if heights[top] >= h {
                break;
            }
            stack.pop();
            let Some(&left) = stack.last() else {
                break;
            };
            let width = (i - left - 1) as i64;
            let bounded = heights[left].min(h) as i64 - heights[top] as i64;
            water += width * bounded;
        }
        stack.push(i);
    }
    water
}
