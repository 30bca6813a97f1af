use anyhow::Result;
use drills_challenges::extra_characters::*;
use drills_utils::Trie;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(min_extra_char(&challenge.text, &challenge.dictionary).map(|extra| Solution { extra }))
}

/// Fewest characters of `text` left over when it is split into dictionary
/// words and leftovers. Works right to left: `best[i]` is the answer for
/// `text[i..]`, and one walk down the trie from `i` finds every word that
/// starts there.
///
/// Returns `None` unless the text and every word are lowercase ASCII.
pub fn min_extra_char(text: &str, dictionary: &[String]) -> Option<usize> {
    let trie = Trie::from_words(dictionary)?;
    if !text.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }
    let bytes = text.as_bytes();
    let mut best = vec![0usize; bytes.len() + 1];
    for i in (0..bytes.len()).rev() {
        best[i] = trie
            .prefix_lengths(&bytes[i..])
            .map(|len| best[i + len])
            .fold(best[i + 1] + 1, usize::min);
    }
    Some(best[0])
}
