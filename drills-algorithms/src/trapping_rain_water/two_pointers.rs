use anyhow::Result;
use drills_challenges::trapping_rain_water::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        water: trap(&challenge.heights),
    }))
}

/// Walks inwards from both ends, always advancing the lower side: the water
/// above that bar is fixed by the running max on its own side.
pub fn trap(heights: &[i32]) -> i64 {
    if heights.len() < 3 {
        return 0;
    }
    let (mut left, mut right) = (0, heights.len() - 1);
    let (mut left_max, mut right_max) = (i64::MIN, i64::MIN);
    let mut water = 0i64;
    while left < right {
        let (l, r) = (heights[left] as i64, heights[right] as i64);
        if l < r {
            left_max = left_max.max(l);
            water += left_max - l;
            left += 1;
        } else {
            right_max = right_max.max(r);
            water += right_max - r;
            right -= 1;
        }
    }
    water
}
