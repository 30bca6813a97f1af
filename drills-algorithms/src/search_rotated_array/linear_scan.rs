use anyhow::Result;
use drills_challenges::search_rotated_array::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        index: search(&challenge.nums, challenge.target),
    }))
}

pub fn search(nums: &[i32], target: i32) -> i32 {
    nums.iter()
        .position(|&v| v == target)
        .map_or(-1, |i| i as i32)
}
