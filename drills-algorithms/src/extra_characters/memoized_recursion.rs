use anyhow::Result;
use drills_challenges::extra_characters::*;

// recursion depth grows with the text
pub const MAX_CHARS: usize = 2000;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(min_extra_char(&challenge.text, &challenge.dictionary).map(|extra| Solution { extra }))
}

struct Search {
    text: Vec<char>,
    words: Vec<Vec<char>>,
    memo: Vec<Option<usize>>,
}

/// Top-down: at each position either skip one char or consume any word
/// that matches there, caching the answer per position. Texts longer than
/// `MAX_CHARS` give `None`.
pub fn min_extra_char(text: &str, dictionary: &[String]) -> Option<usize> {
    let text: Vec<char> = text.chars().collect();
    if text.len() > MAX_CHARS {
        return None;
    }
    let mut search = Search {
        memo: vec![None; text.len() + 1],
        words: dictionary.iter().map(|w| w.chars().collect()).collect(),
        text,
    };
    Some(search.from(0))
}

impl Search {
    fn from(&mut self, i: usize) -> usize {
        if i == self.text.len() {
            return 0;
        }
        if let Some(cached) = self.memo[i] {
            return cached;
        }
        let mut best = self.from(i + 1) + 1;
        for w in 0..self.words.len() {
            let len = self.words[w].len();
            if len > 0 && self.text[i..].starts_with(&self.words[w]) {
                best = best.min(self.from(i + len));
            }
        }
        self.memo[i] = Some(best);
        best
    }
}
