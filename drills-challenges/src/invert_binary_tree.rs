use anyhow::{anyhow, Result};
use drills_utils::TreeNode;
use rand::{rngs::SmallRng, Rng, SeedableRng};
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
    pub root: Option<Box<TreeNode>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub root: Option<Box<TreeNode>>,
}

/// Grows a tree of `num_nodes` nodes by walking each new node down a random
/// path until it finds a free slot. Expected height is logarithmic.
pub fn random_tree(rng: &mut SmallRng, num_nodes: usize) -> Option<Box<TreeNode>> {
    let mut root = None;
    for _ in 0..num_nodes {
        let val = rng.gen_range(-1000..=1000);
        attach_at_random_leaf(&mut root, rng, val);
    }
    root
}

fn attach_at_random_leaf(slot: &mut Option<Box<TreeNode>>, rng: &mut SmallRng, val: i32) {
    match slot {
        Some(node) => {
            let next = if rng.gen_bool(0.5) {
                &mut node.left
            } else {
                &mut node.right
            };
            attach_at_random_leaf(next, rng, val);
        }
        None => *slot = Some(Box::new(TreeNode::new(val))),
    }
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
            let expected = TreeNode::mirrored(self.root.as_deref());
            if solution.root != expected {
                return Err(anyhow!(
                    "Inverted tree {:?} does not match expected {:?}",
                    TreeNode::to_level_order(solution.root.as_deref()),
                    TreeNode::to_level_order(expected.as_deref())
                ));
            }
            Ok(())
        }
    );
}
