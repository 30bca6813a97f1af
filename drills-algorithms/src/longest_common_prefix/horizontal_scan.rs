use super::{common_byte_len, floor_char_boundary};
use anyhow::Result;
use drills_challenges::longest_common_prefix::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        prefix: longest_common_prefix(&challenge.strings),
    }))
}

/// Shrinks the first string against each of the others in turn.
pub fn longest_common_prefix(strs: &[String]) -> String {
    let Some((first, rest)) = strs.split_first() else {
        return String::new();
    };
    let mut len = first.len();
    for s in rest {
        len = common_byte_len(&first[..len], s);
        if len == 0 {
            break;
        }
        len = floor_char_boundary(first, len);
    }
    first[..len].to_string()
}
