use anyhow::Result;
use drills_challenges::min_stack::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    let mut stack = PairMinStack::default();
    Ok(Some(Solution {
        outputs: run_operations(&mut stack, &challenge.operations),
    }))
}

/// Each entry remembers the minimum of itself and everything below it.
#[derive(Debug, Clone, Default)]
pub struct PairMinStack {
    entries: Vec<(i32, i32)>,
}

impl MinStack for PairMinStack {
    fn push(&mut self, val: i32) {
        let min = self.get_min().map_or(val, |min| min.min(val));
        self.entries.push((val, min));
    }

    fn pop(&mut self) -> Option<i32> {
        self.entries.pop().map(|(val, _)| val)
    }

    fn top(&self) -> Option<i32> {
        self.entries.last().map(|&(val, _)| val)
    }

    fn get_min(&self) -> Option<i32> {
        self.entries.last().map(|&(_, min)| min)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
