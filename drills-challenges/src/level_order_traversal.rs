use crate::invert_binary_tree::random_tree;
use anyhow::{anyhow, Result};
use drills_utils::TreeNode;
use rand::{rngs::SmallRng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub num_nodes: usize,
}

impl_difficulty_vec!(Difficulty {
    num_nodes: usize = 15, 0..=10_000;
});

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub levels: Vec<Vec<i32>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub root: Option<Box<TreeNode>>,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        Ok(Self {
            seed: seed.clone(),
            root: random_tree(&mut rng, difficulty.num_nodes),
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let mut expected = Vec::new();
            let mut level: Vec<&TreeNode> = self.root.as_deref().into_iter().collect();
            while !level.is_empty() {
                expected.push(level.iter().map(|node| node.val).collect::<Vec<i32>>());
                level = level
                    .iter()
                    .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
                    .flatten()
                    .collect();
            }
            if solution.levels != expected {
                return Err(anyhow!(
                    "Levels {:?} do not match expected {:?}",
                    solution.levels,
                    expected
                ));
            }
            Ok(())
        }
    );
}
