use anyhow::Result;
use drills_challenges::k_closest_elements::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        values: find_closest_elements(&challenge.arr, challenge.k, challenge.x),
    }))
}

/// The `k` values of sorted `arr` closest to `x`, ascending. Equally close
/// values prefer the smaller one. `k` past the length returns all of `arr`.
///
/// The answer is a contiguous window; binary search its left edge by
/// comparing the value just outside each side of a candidate window.
pub fn find_closest_elements(arr: &[i32], k: usize, x: i32) -> Vec<i32> {
    if k >= arr.len() {
        return arr.to_vec();
    }
    let x = x as i64;
    let (mut lo, mut hi) = (0, arr.len() - k);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if x - arr[mid] as i64 > arr[mid + k] as i64 - x {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    arr[lo..lo + k].to_vec()
}
