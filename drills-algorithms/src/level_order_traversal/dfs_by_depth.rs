use anyhow::Result;
use drills_challenges::level_order_traversal::*;
use drills_utils::TreeNode;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        levels: level_order(challenge.root.as_deref()),
    }))
}

/// Pre-order walk appending each value to the row of its depth. Visiting
/// left before right keeps every row in left-to-right order.
pub fn level_order(root: Option<&TreeNode>) -> Vec<Vec<i32>> {
    let mut levels: Vec<Vec<i32>> = Vec::new();
    let mut stack: Vec<(&TreeNode, usize)> = root.map(|node| (node, 0)).into_iter().collect();
    while let Some((node, depth)) = stack.pop() {
        if levels.len() == depth {
            levels.push(Vec::new());
        }
        levels[depth].push(node.val);
        if let Some(right) = node.right.as_deref() {
            stack.push((right, depth + 1));
        }
        if let Some(left) = node.left.as_deref() {
            stack.push((left, depth + 1));
        }
    }
    levels
}
