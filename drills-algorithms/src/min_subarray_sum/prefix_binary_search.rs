use anyhow::Result;
use drills_challenges::min_subarray_sum::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        length: min_sub_array_len(challenge.target, &challenge.nums),
    }))
}

/// Positive values make the prefix sums strictly increasing, so for each
/// start the first end reaching the target is a binary search away.
pub fn min_sub_array_len(target: i64, nums: &[i32]) -> usize {
    let mut prefix = Vec::with_capacity(nums.len() + 1);
    prefix.push(0i64);
    for &v in nums {
        prefix.push(prefix[prefix.len() - 1] + v as i64);
    }
    (0..nums.len())
        .filter_map(|start| {
            let needed = prefix[start] + target;
            let offset = prefix[start + 1..].partition_point(|&sum| sum < needed);
            (start + 1 + offset <= nums.len()).then_some(offset + 1)
        })
        .min()
        .unwrap_or(0)
}
