use anyhow::Result;
use drills_challenges::min_subarray_sum::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        length: min_sub_array_len(challenge.target, &challenge.nums),
    }))
}

pub fn min_sub_array_len(target: i64, nums: &[i32]) -> usize {
    let mut best = 0;
    for start in 0..nums.len() {
        let mut sum = 0i64;
        for end in start..nums.len() {
            sum += nums[end] as i64;
            if sum >= target {
                let len = end + 1 - start;
                if best == 0 || len < best {
                    best = len;
                }
                break;
            }
        }
    }
    best
}
