use anyhow::Result;
use drills_challenges::find_min_rotated::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        min: find_min(&challenge.nums),
    }))
}

pub fn find_min(nums: &[i32]) -> Option<i32> {
    nums.iter().min().copied()
}
