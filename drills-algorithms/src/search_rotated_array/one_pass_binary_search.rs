use anyhow::Result;
use drills_challenges::search_rotated_array::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        index: search(&challenge.nums, challenge.target),
    }))
}

/// Index of `target` in a rotated array of distinct ascending values, or -1.
///
/// At least one half around `mid` is always sorted; checking whether the
/// target falls inside that half decides which side to keep.
pub fn search(nums: &[i32], target: i32) -> i32 {
    let (mut lo, mut hi) = (0, nums.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if nums[mid] == target {
            return mid as i32;
        }
        if nums[lo] <= nums[mid] {
            if nums[lo] <= target && target < nums[mid] {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        } else if nums[mid] < target && target <= nums[hi - 1] {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    -1
}
