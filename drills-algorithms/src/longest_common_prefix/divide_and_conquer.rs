use super::{common_byte_len, floor_char_boundary};
use anyhow::Result;
use drills_challenges::longest_common_prefix::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        prefix: longest_common_prefix(&challenge.strings),
    }))
}

pub fn longest_common_prefix(strs: &[String]) -> String {
    if strs.is_empty() {
        return String::new();
    }
    prefix_of(strs).to_string()
}

fn prefix_of(strs: &[String]) -> &str {
    if let [single] = strs {
        return single;
    }
    let (left, right) = strs.split_at(strs.len() / 2);
    let (left, right) = (prefix_of(left), prefix_of(right));
    &left[..floor_char_boundary(left, common_byte_len(left, right))]
}
