use anyhow::Result;
use drills_challenges::open_the_lock::*;
use std::collections::VecDeque;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        turns: open_lock(&challenge.deadends, &challenge.target),
    }))
}

/// BFS over the state numbers with a flat distance table instead of a set of
/// strings. Deadends that are not valid codes are ignored.
pub fn open_lock(deadends: &[String], target: &str) -> i32 {
    let Some(target) = parse_code(target) else {
        return -1;
    };
    const UNSEEN: i32 = -1;
    const BLOCKED: i32 = -2;
    let mut dist = vec![UNSEEN; NUM_STATES];
    for state in deadends.iter().filter_map(|d| parse_code(d)) {
        dist[state] = BLOCKED;
    }
    if dist[0] == BLOCKED {
        return -1;
    }

    dist[0] = 0;
    let mut queue = VecDeque::from([0usize]);
    while let Some(state) = queue.pop_front() {
        if state == target {
            return dist[state];
        }
        for next in neighbours(state) {
            if dist[next] == UNSEEN {
                dist[next] = dist[state] + 1;
                queue.push_back(next);
            }
        }
    }
    -1
}
