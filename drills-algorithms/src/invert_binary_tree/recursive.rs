use anyhow::Result;
use drills_challenges::invert_binary_tree::*;
use drills_utils::TreeNode;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        root: invert_tree(challenge.root.clone()),
    }))
}

/// Mirrors the tree in place by swapping the children of every node.
pub fn invert_tree(root: Option<Box<TreeNode>>) -> Option<Box<TreeNode>> {
    root.map(|mut node| {
        let left = node.left.take();
        let right = node.right.take();
        node.left = invert_tree(right);
        node.right = invert_tree(left);
        node
    })
}
