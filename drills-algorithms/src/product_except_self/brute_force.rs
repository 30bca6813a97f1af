use anyhow::Result;
use drills_challenges::product_except_self::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        products: product_except_self(&challenge.nums),
    }))
}

// O(n^2)
pub fn product_except_self(nums: &[i64]) -> Vec<i64> {
    (0..nums.len())
        .map(|i| {
            nums.iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(1i64, |acc, (_, &v)| acc.wrapping_mul(v))
        })
        .collect()
}
