use anyhow::Result;
use drills_challenges::invert_binary_tree::*;
use drills_utils::TreeNode;
use std::collections::VecDeque;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        root: invert_tree(challenge.root.clone()),
    }))
}

pub fn invert_tree(mut root: Option<Box<TreeNode>>) -> Option<Box<TreeNode>> {
    let mut queue: VecDeque<&mut TreeNode> = root.as_deref_mut().into_iter().collect();
    while let Some(node) = queue.pop_front() {
        let TreeNode { left, right, .. } = node;
        std::mem::swap(left, right);
        queue.extend(left.as_deref_mut());
        queue.extend(right.as_deref_mut());
    }
    root
}
