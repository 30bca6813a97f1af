use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// A stack that also reports its minimum, every operation in O(1).
///
/// `get_min` always reflects the values currently on the stack. `pop`, `top`
/// and `get_min` return `None` on an empty stack.
pub trait MinStack {
    fn push(&mut self, val: i32);
    fn pop(&mut self) -> Option<i32>;
    fn top(&self) -> Option<i32>;
    fn get_min(&self) -> Option<i32>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Push(i32),
    Pop,
    Top,
    GetMin,
}

impl Operation {
    /// Applies the operation; `push` yields `None`, the others their result.
    pub fn apply<S: MinStack + ?Sized>(&self, stack: &mut S) -> Option<i32> {
        match *self {
            Operation::Push(val) => {
                stack.push(val);
                None
            }
            Operation::Pop => stack.pop(),
            Operation::Top => stack.top(),
            Operation::GetMin => stack.get_min(),
        }
    }
}

pub fn run_operations<S: MinStack + ?Sized>(stack: &mut S, operations: &[Operation]) -> Vec<Option<i32>> {
    operations.iter().map(|op| op.apply(stack)).collect()
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub num_operations: usize,
    pub max_abs_value: i32,
}

impl_difficulty_vec!(Difficulty {
    num_operations: usize = 64, 0..=1_000_000;
    max_abs_value: i32 = 100, 0..=1_000_000_000;
});

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub outputs: Vec<Option<i32>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub operations: Vec<Operation>,
}

impl Challenge {
    /// Scripts never pop, peek or query an empty stack.
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let mut size = 0usize;
        let operations = (0..difficulty.num_operations)
            .map(|_| {
                let roll = if size == 0 { 0 } else { rng.gen_range(0..10) };
                match roll {
                    0..=3 => {
                        size += 1;
                        Operation::Push(
                            rng.gen_range(-difficulty.max_abs_value..=difficulty.max_abs_value),
                        )
                    }
                    4..=5 => {
                        size -= 1;
                        Operation::Pop
                    }
                    6..=7 => Operation::Top,
                    _ => Operation::GetMin,
                }
            })
            .collect();

        Ok(Self {
            seed: seed.clone(),
            operations,
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            if solution.outputs.len() != self.operations.len() {
                return Err(anyhow!(
                    "Expected {} outputs, got {}",
                    self.operations.len(),
                    solution.outputs.len()
                ));
            }
            let expected = run_operations(&mut ReferenceStack::default(), &self.operations);
            for (i, (actual, expected)) in solution.outputs.iter().zip(&expected).enumerate() {
                if actual != expected {
                    return Err(anyhow!(
                        "Operation {} ({:?}) returned {:?}, expected {:?}",
                        i,
                        self.operations[i],
                        actual,
                        expected
                    ));
                }
            }
            Ok(())
        }
    );
}

// Reference stack: mins[i] is the minimum of values[..=i].
#[derive(Default)]
struct ReferenceStack {
    values: Vec<i32>,
    mins: Vec<i32>,
}

impl MinStack for ReferenceStack {
    fn push(&mut self, val: i32) {
        let min = self.mins.last().map_or(val, |&m| m.min(val));
        self.values.push(val);
        self.mins.push(min);
    }

    fn pop(&mut self) -> Option<i32> {
        self.mins.pop();
        self.values.pop()
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
