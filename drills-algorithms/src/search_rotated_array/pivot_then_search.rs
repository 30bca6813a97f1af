use crate::find_min_rotated::binary_search::min_index;
use anyhow::Result;
use drills_challenges::search_rotated_array::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        index: search(&challenge.nums, challenge.target),
    }))
}

/// Locates the rotation point first, then runs a plain binary search over
/// whichever sorted run can hold the target.
pub fn search(nums: &[i32], target: i32) -> i32 {
    let Some(pivot) = min_index(nums) else {
        return -1;
    };
    let (offset, run) = if pivot > 0 && target >= nums[0] {
        (0, &nums[..pivot])
    } else {
        (pivot, &nums[pivot..])
    };
    run.binary_search(&target)
        .map_or(-1, |i| (offset + i) as i32)
}
