use anyhow::Result;
use drills_challenges::boats_to_save_people::*;

// buckets run up to the heaviest person
pub const MAX_WEIGHT: i32 = 1 << 20;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    if challenge.people.iter().any(|&w| w < 0 || w > MAX_WEIGHT) {
        return Ok(None);
    }
    Ok(Some(Solution {
        boats: num_rescue_boats(&challenge.people, challenge.limit),
    }))
}

/// Same greedy as sorting, but over a weight histogram sized by the heaviest
/// person. Weights that are negative, above `limit` or above `MAX_WEIGHT`
/// give `None`.
pub fn num_rescue_boats(people: &[i32], limit: i32) -> Option<usize> {
    let heaviest = match people.iter().max() {
        Some(&w) => w,
        None => return Some(0),
    };
    if heaviest > limit || heaviest > MAX_WEIGHT || people.iter().any(|&w| w < 0) {
        return None;
    }
    let mut counts = vec![0usize; heaviest as usize + 1];
    for &w in people {
        counts[w as usize] += 1;
    }

    let limit = limit as i64;
    let (mut light, mut heavy) = (0usize, heaviest as usize);
    let mut boats = 0;
    loop {
        while heavy > 0 && counts[heavy] == 0 {
            heavy -= 1;
        }
        if counts[heavy] == 0 {
            break;
        }
        counts[heavy] -= 1;
        boats += 1;

        while light <= heavy && counts[light] == 0 {
            light += 1;
        }
        if light <= heavy && (light + heavy) as i64 <= limit {
            counts[light] -= 1;
        }
    }
    Some(boats)
}
