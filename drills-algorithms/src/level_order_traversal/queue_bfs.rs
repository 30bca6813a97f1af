use anyhow::Result;
use drills_challenges::level_order_traversal::*;
use drills_utils::TreeNode;
use std::collections::VecDeque;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        levels: level_order(challenge.root.as_deref()),
    }))
}

/// Node values grouped by depth, left to right.
pub fn level_order(root: Option<&TreeNode>) -> Vec<Vec<i32>> {
    let mut levels = Vec::new();
    let mut queue: VecDeque<&TreeNode> = root.into_iter().collect();
    while !queue.is_empty() {
        let width = queue.len();
        let mut level = Vec::with_capacity(width);
        for _ in 0..width {
            let Some(node) = queue.pop_front() else {
                break;
            };
            level.push(node.val);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        levels.push(level);
    }
    levels
}
