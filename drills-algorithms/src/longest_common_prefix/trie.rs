use anyhow::Result;
use drills_challenges::longest_common_prefix::*;
use drills_utils::Trie;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(longest_common_prefix(&challenge.strings).map(|prefix| Solution { prefix }))
}

/// Inserts every string into a trie and follows the single-child chain from
/// the root. Only lowercase ASCII fits the trie; anything else gives `None`.
pub fn longest_common_prefix(strs: &[String]) -> Option<String> {
    Trie::from_words(strs).map(|trie| trie.longest_common_prefix())
}
