use anyhow::Result;
use drills_challenges::open_the_lock::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        turns: open_lock(&challenge.deadends, &challenge.target),
    }))
}

/// Grows frontiers from both ends, always expanding the smaller one, until
/// they touch.
pub fn open_lock(deadends: &[String], target: &str) -> i32 {
    let Some(target) = parse_code(target) else {
        return -1;
    };
    let mut blocked = vec![false; NUM_STATES];
    for state in deadends.iter().filter_map(|d| parse_code(d)) {
        blocked[state] = true;
    }
    if blocked[0] || blocked[target] {
        return -1;
    }
    if target == 0 {
        return 0;
    }

    // 0 = unseen, 1 = reached from start, 2 = reached from target
    let mut side = vec![0u8; NUM_STATES];
    side[0] = 1;
    side[target] = 2;
    let mut front = vec![0usize];
    let mut back = vec![target];
    let (mut front_side, mut back_side) = (1u8, 2u8);
    let mut turns = 0;

    while !front.is_empty() && !back.is_empty() {
        if front.len() > back.len() {
            std::mem::swap(&mut front, &mut back);
            std::mem::swap(&mut front_side, &mut back_side);
        }
        turns += 1;
        let mut next_front = Vec::new();
        for &state in &front {
            for next in neighbours(state) {
                if blocked[next] {
                    continue;
                }
                if side[next] == back_side {
                    return turns;
                }
                if side[next] == 0 {
                    side[next] = front_side;
                    next_front.push(next);
                }
            }
        }
        front = next_front;
    }
    -1
}
