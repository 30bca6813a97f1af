use crate::{seeded_hasher, HashSet};
use ahash::RandomState;
use anyhow::Result;
use drills_challenges::open_the_lock::*;
use std::collections::VecDeque;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    let hasher = seeded_hasher(&challenge.seed);
    Ok(Some(Solution {
        turns: open_lock_with_hasher(&challenge.deadends, &challenge.target, hasher),
    }))
}

/// Fewest wheel turns from `"0000"` to `target` without passing through a
/// deadend, or `-1` if the target is malformed or cannot be reached.
pub fn open_lock(deadends: &[String], target: &str) -> i32 {
    open_lock_with_hasher(deadends, target, RandomState::new())
}

fn open_lock_with_hasher(deadends: &[String], target: &str, hasher: RandomState) -> i32 {
    let Some(target) = parse_code(target) else {
        return -1;
    };
    let mut visited: HashSet<String> = HashSet::with_hasher(hasher);
    visited.extend(deadends.iter().cloned());
    if !visited.insert(START.to_string()) {
        return -1;
    }

    let mut queue = VecDeque::from([(START.to_string(), 0)]);
    while let Some((code, turns)) = queue.pop_front() {
        let Some(state) = parse_code(&code) else {
            continue;
        };
        if state == target {
            return turns;
        }
        for next in neighbours(state).map(format_code) {
            if visited.insert(next.clone()) {
                queue.push_back((next, turns + 1));
            }
        }
    }
    -1
}
