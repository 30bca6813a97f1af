use anyhow::Result;
use drills_challenges::invert_binary_tree::*;
use drills_utils::TreeNode;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        root: invert_tree(challenge.root.clone()),
    }))
}

/// Depth-first with an explicit stack, for trees too deep to recurse over.
pub fn invert_tree(mut root: Option<Box<TreeNode>>) -> Option<Box<TreeNode>> {
    let mut stack: Vec<&mut TreeNode> = root.as_deref_mut().into_iter().collect();
    while let Some(node) = stack.pop() {
        let TreeNode { left, right, .. } = node;
        std::mem::swap(left, right);
        stack.extend(right.as_deref_mut());
        stack.extend(left.as_deref_mut());
    }
    root
}
