use anyhow::Result;
use drills_challenges::product_except_self::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        products: product_except_self(&challenge.nums),
    }))
}

pub fn product_except_self(nums: &[i64]) -> Vec<i64> {
    let n = nums.len();
    let mut left = vec![1i64; n + 1];
    let mut right = vec![1i64; n + 1];
    for i in 0..n {
        left[i + 1] = left[i].wrapping_mul(nums[i]);
    }
    for i in (0..n).rev() {
        right[i] = right[i + 1].wrapping_mul(nums[i]);
    }
    (0..n).map(|i| left[i].wrapping_mul(right[i + 1])).collect()
}
