use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Binary tree node. Each node exclusively owns its children.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    pub fn with_children(
        val: i32,
        left: Option<Box<TreeNode>>,
        right: Option<Box<TreeNode>>,
    ) -> Self {
        Self { val, left, right }
    }

    /// Builds a tree from level order with `None` holes, e.g.
    /// `[Some(4), Some(2), Some(7), None, Some(3)]`. Children listed for a
    /// missing parent are ignored, and a leading `None` yields an empty tree.
    pub fn from_level_order(values: &[Option<i32>]) -> Option<Box<TreeNode>> {
        let mut values = values.iter();
        let mut root = Box::new(TreeNode::new((*values.next()?)?));
        {
            let mut queue: VecDeque<&mut Box<TreeNode>> = VecDeque::new();
            queue.push_back(&mut root);
            while let Some(node) = queue.pop_front() {
                let TreeNode { left, right, .. } = &mut **node;
                match values.next() {
                    Some(Some(v)) => *left = Some(Box::new(TreeNode::new(*v))),
                    Some(None) => {}
                    None => break,
                }
                match values.next() {
                    Some(Some(v)) => *right = Some(Box::new(TreeNode::new(*v))),
                    Some(None) => {}
                    None => break,
                }
                if let Some(l) = left.as_mut() {
                    queue.push_back(l);
                }
                if let Some(r) = right.as_mut() {
                    queue.push_back(r);
                }
            }
        }
        Some(root)
    }

    /// Inverse of [`TreeNode::from_level_order`], with trailing `None`s trimmed.
    pub fn to_level_order(root: Option<&TreeNode>) -> Vec<Option<i32>> {
        let mut output = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(root);
        while let Some(node) = queue.pop_front() {
            match node {
                Some(node) => {
                    output.push(Some(node.val));
                    queue.push_back(node.left.as_deref());
                    queue.push_back(node.right.as_deref());
                }
                None => output.push(None),
            }
        }
        while let Some(None) = output.last() {
            output.pop();
        }
        output
    }

    pub fn size(root: Option<&TreeNode>) -> usize {
        match root {
            Some(node) => 1 + Self::size(node.left.as_deref()) + Self::size(node.right.as_deref()),
            None => 0,
        }
    }

    pub fn height(root: Option<&TreeNode>) -> usize {
        match root {
            Some(node) => {
                1 + Self::height(node.left.as_deref()).max(Self::height(node.right.as_deref()))
            }
            None => 0,
        }
    }

    /// Returns a mirrored copy, leaving `root` untouched.
    pub fn mirrored(root: Option<&TreeNode>) -> Option<Box<TreeNode>> {
        root.map(|node| {
            Box::new(TreeNode {
                val: node.val,
                left: Self::mirrored(node.right.as_deref()),
                right: Self::mirrored(node.left.as_deref()),
            })
        })
    }
}
