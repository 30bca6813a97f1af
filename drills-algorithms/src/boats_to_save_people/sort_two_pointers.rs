use anyhow::Result;
use drills_challenges::boats_to_save_people::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        boats: num_rescue_boats(&challenge.people, challenge.limit),
    }))
}

/// Minimum number of boats carrying at most two people each, or `None` if
/// someone alone exceeds `limit`.
pub fn num_rescue_boats(people: &[i32], limit: i32) -> Option<usize> {
    let mut sorted = people.to_vec();
    sorted.sort_unstable();
    if sorted.last().is_some_and(|&heaviest| heaviest > limit) {
        return None;
    }
    let mut boats = 0;
    let (mut light, mut heavy) = (0usize, sorted.len());
    while light < heavy {
        heavy -= 1;
        if light < heavy && sorted[light] as i64 + sorted[heavy] as i64 <= limit as i64 {
            light += 1;
        }
        boats += 1;
    }
    Some(boats)
}
