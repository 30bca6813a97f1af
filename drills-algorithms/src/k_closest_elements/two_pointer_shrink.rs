use anyhow::Result;
use drills_challenges::k_closest_elements::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        values: find_closest_elements(&challenge.arr, challenge.k, challenge.x),
    }))
}

/// Drops the farther end of the window until `k` values remain.
pub fn find_closest_elements(arr: &[i32], k: usize, x: i32) -> Vec<i32> {
    let (mut lo, mut hi) = (0, arr.len());
    while hi - lo > k {
        if closer(arr[lo], arr[hi - 1], x).is_gt() {
            lo += 1;
        } else {
            hi -= 1;
        }
    }
    arr[lo..hi].to_vec()
}
