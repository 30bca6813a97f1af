use anyhow::Result;
use drills_challenges::min_subarray_sum::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        length: min_sub_array_len(challenge.target, &challenge.nums),
    }))
}

/// Length of the shortest contiguous run of positive `nums` summing to at
/// least `target`, or 0 if even the whole array falls short.
pub fn min_sub_array_len(target: i64, nums: &[i32]) -> usize {
    let mut best = usize::MAX;
    let mut sum = 0i64;
    let mut left = 0;
    for (right, &v) in nums.iter().enumerate() {
        sum += v as i64;
        while left <= right && sum >= target {
            best = best.min(right + 1 - left);
            sum -= nums[left] as i64;
            left += 1;
        }
    }
    if best == usize::MAX {
        0
    } else {
        best
    }
}
