use anyhow::Result;
use drills_challenges::find_min_rotated::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        min: find_min(&challenge.nums),
    }))
}

/// Smallest value of a rotated array of distinct ascending values.
pub fn find_min(nums: &[i32]) -> Option<i32> {
    min_index(nums).map(|i| nums[i])
}

/// Index of the rotation point. Comparing `mid` with the last element tells
/// which side of the drop it is on.
pub fn min_index(nums: &[i32]) -> Option<usize> {
    if nums.is_empty() {
        return None;
    }
    let (mut lo, mut hi) = (0, nums.len() - 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if nums[mid] > nums[hi] {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    Some(lo)
}
