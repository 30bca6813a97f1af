use anyhow::Result;
use drills_challenges::k_closest_elements::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        values: find_closest_elements(&challenge.arr, challenge.k, challenge.x),
    }))
}

// O(n log n), and does not need `arr` sorted
pub fn find_closest_elements(arr: &[i32], k: usize, x: i32) -> Vec<i32> {
    let mut values = arr.to_vec();
    values.sort_by(|&a, &b| closer(a, b, x));
    values.truncate(k);
    values.sort_unstable();
    values
}
