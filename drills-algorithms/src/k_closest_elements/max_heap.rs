use anyhow::Result;
use drills_challenges::k_closest_elements::*;
use std::collections::BinaryHeap;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        values: find_closest_elements(&challenge.arr, challenge.k, challenge.x),
    }))
}

/// Keeps the best `k` so far in a max-heap keyed on (distance, value), so the
/// worst of them is always the one evicted.
pub fn find_closest_elements(arr: &[i32], k: usize, x: i32) -> Vec<i32> {
    if k == 0 {
        return Vec::new();
    }
    let mut heap = BinaryHeap::with_capacity(k + 1);
    for &v in arr {
        heap.push(((v as i64 - x as i64).abs(), v));
        if heap.len() > k {
            heap.pop();
        }
    }
    let mut values: Vec<i32> = heap.into_iter().map(|(_, v)| v).collect();
    values.sort_unstable();
    values
}
