use drills_utils::TreeNode;

#[test]
fn test_level_order_roundtrip() {
    let values = vec![Some(4), Some(2), Some(7), Some(1), Some(3), Some(6), Some(9)];
    let root = TreeNode::from_level_order(&values);
    assert_eq!(TreeNode::to_level_order(root.as_deref()), values);

    let sparse = vec![Some(1), None, Some(2), Some(3)];
    let root = TreeNode::from_level_order(&sparse);
    assert_eq!(TreeNode::to_level_order(root.as_deref()), sparse);
    assert_eq!(TreeNode::size(root.as_deref()), 3);
    assert_eq!(TreeNode::height(root.as_deref()), 3);
}

#[test]
fn test_empty_tree() {
    assert_eq!(TreeNode::from_level_order(&[]), None);
    assert_eq!(TreeNode::from_level_order(&[None, Some(1)]), None);
    assert!(TreeNode::to_level_order(None).is_empty());
    assert_eq!(TreeNode::size(None), 0);
    assert_eq!(TreeNode::height(None), 0);
}

#[test]
fn test_mirrored() {
    let root = TreeNode::from_level_order(&[Some(2), Some(1), Some(3)]);
    let mirror = TreeNode::mirrored(root.as_deref());
    assert_eq!(
        TreeNode::to_level_order(mirror.as_deref()),
        vec![Some(2), Some(3), Some(1)]
    );
    // source is untouched
    assert_eq!(
        TreeNode::to_level_order(root.as_deref()),
        vec![Some(2), Some(1), Some(3)]
    );
}

#[test]
fn test_with_children() {
    let root = TreeNode::with_children(
        1,
        Some(Box::new(TreeNode::new(2))),
        None,
    );
    assert_eq!(
        TreeNode::to_level_order(Some(&root)),
        vec![Some(1), Some(2)]
    );
}
