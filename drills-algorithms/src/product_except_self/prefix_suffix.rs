use anyhow::Result;
use drills_challenges::product_except_self::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        products: product_except_self(&challenge.nums),
    }))
}

/// `output[i]` is the product of every value but `nums[i]`, without division.
/// Products wrap on overflow.
///
/// The output doubles as the prefix table; the suffix product is folded in on
/// a second pass from the right, so no extra buffer is allocated.
pub fn product_except_self(nums: &[i64]) -> Vec<i64> {
    let mut output = vec![1i64; nums.len()];
    let mut running = 1i64;
    for (i, &v) in nums.iter().enumerate() {
        output[i] = running;
        running = running.wrapping_mul(v);
    }
    running = 1;
    for (i, &v) in nums.iter().enumerate().rev() {
        output[i] = output[i].wrapping_mul(running);
        running = running.wrapping_mul(v);
    }
    output
}
