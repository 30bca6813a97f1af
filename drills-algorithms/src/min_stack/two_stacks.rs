use anyhow::Result;
use drills_challenges::min_stack::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    let mut stack = TwoStackMinStack::default();
    Ok(Some(Solution {
        outputs: run_operations(&mut stack, &challenge.operations),
    }))
}

/// Values on one stack, and a second stack of running minimums that only
/// grows when a value is `<=` the current minimum. Duplicated minimums must
/// be pushed again or popping one would lose the other.
#[derive(Debug, Clone, Default)]
pub struct TwoStackMinStack {
    values: Vec<i32>,
    mins: Vec<i32>,
}

impl MinStack for TwoStackMinStack {
    fn push(&mut self, val: i32) {
        if self.mins.last().map_or(true, |&min| val <= min) {
            self.mins.push(val);
        }
        self.values.push(val);
    }

    fn pop(&mut self) -> Option<i32> {
        let val = self.values.pop()?;
        if self.mins.last() == Some(&val) {
            self.mins.pop();
        }
        Some(val)
    }

    fn top(&self) -> Option<i32> {
        self.values.last().copied()
    }

    fn get_min(&self) -> Option<i32> {
        self.mins.last().copied()
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}
