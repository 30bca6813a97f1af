use anyhow::Result;
use drills_challenges::k_closest_elements::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::cmp::Ordering;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    let mut rng = SmallRng::from_seed(challenge.seed.clone());
    Ok(Some(Solution {
        values: find_closest_elements_with_rng(&challenge.arr, challenge.k, challenge.x, &mut rng),
    }))
}

pub fn find_closest_elements(arr: &[i32], k: usize, x: i32) -> Vec<i32> {
    let mut rng = SmallRng::seed_from_u64(0);
    find_closest_elements_with_rng(arr, k, x, &mut rng)
}

/// Partitions around random pivots until the first `k` slots hold the `k`
/// closest values. Expected O(n).
pub fn find_closest_elements_with_rng(arr: &[i32], k: usize, x: i32, rng: &mut SmallRng) -> Vec<i32> {
    let mut values = arr.to_vec();
    let k = k.min(values.len());
    // three-way partitioning so runs of duplicates cannot make it quadratic
    let (mut lo, mut hi) = (0, values.len());
    while lo < hi {
        let pivot = values[rng.gen_range(lo..hi)];
        let (mut lt, mut i, mut gt) = (lo, lo, hi);
        while i < gt {
            match closer(values[i], pivot, x) {
                Ordering::Less => {
                    values.swap(lt, i);
                    lt += 1;
                    i += 1;
                }
                Ordering::Greater => {
                    gt -= 1;
                    values.swap(i, gt);
                }
                Ordering::Equal => i += 1,
            }
        }
        if k < lt {
            hi = lt;
        } else if k > gt {
            lo = gt;
        } else {
            break;
        }
    }
    values.truncate(k);
    values.sort_unstable();
    values
}
