use rstest::rstest;

use prepkit::topics::tree::{BinaryTree, Side};

/// The classic depth-3 example tree:
///
/// ```text
///     3
///    / \
///   9  20
///      / \
///     15  7
/// ```
fn sample_tree() -> BinaryTree {
    BinaryTree::from_level_order(&[Some(3), Some(9), Some(20), None, None, Some(15), Some(7)])
}

#[rstest]
fn test_max_depth_variants_agree() {
    let tree = sample_tree();
    assert_eq!(tree.max_depth(), 3);
    assert_eq!(tree.max_depth_bfs(), 3);
    assert_eq!(tree.max_depth_iterative(), 3);
}

#[rstest]
fn test_max_depth_empty_and_single() {
    let empty = BinaryTree::new();
    assert!(empty.is_empty());
    assert_eq!(empty.max_depth(), 0);
    assert_eq!(empty.max_depth_bfs(), 0);
    assert_eq!(empty.max_depth_iterative(), 0);

    let mut single = BinaryTree::new();
    single.insert_root(42);
    assert_eq!(single.max_depth(), 1);
    assert_eq!(single.len(), 1);
}

#[rstest]
fn test_max_depth_linear_chain() {
    // Left-leaning chain 1 -> 2 -> 3
    let tree = BinaryTree::from_level_order(&[Some(1), Some(2), None, Some(3)]);
    assert_eq!(tree.max_depth(), 3);
    assert_eq!(tree.max_depth_iterative(), 3);
}

#[rstest]
fn test_traversal_orders() {
    let tree = sample_tree();
    assert_eq!(tree.preorder(), vec![3, 9, 20, 15, 7]);
    assert_eq!(tree.inorder(), vec![9, 3, 15, 20, 7]);
    assert_eq!(tree.postorder(), vec![9, 15, 7, 20, 3]);
}

#[rstest]
fn test_levels_groups_by_tier() {
    let tree = sample_tree();
    assert_eq!(tree.levels(), vec![vec![3], vec![9, 20], vec![15, 7]]);
    assert!(BinaryTree::new().levels().is_empty());
}

#[rstest]
fn test_deepest_path_prefers_left_on_tie() {
    let tree = sample_tree();
    assert_eq!(tree.deepest_path(), vec![3, 20, 15]);
    assert!(BinaryTree::new().deepest_path().is_empty());
}

#[rstest]
fn test_same_tree() {
    assert!(sample_tree().same_tree(&sample_tree()));
    assert!(BinaryTree::new().same_tree(&BinaryTree::new()));

    let other = BinaryTree::from_level_order(&[Some(3), Some(9), Some(20)]);
    assert!(!sample_tree().same_tree(&other));

    // Same values, different shape
    let left = BinaryTree::from_level_order(&[Some(1), Some(2)]);
    let mut right = BinaryTree::new();
    let root = right.insert_root(1);
    right.insert_child(root, Side::Right, 2);
    assert!(!left.same_tree(&right));
}

#[rstest]
fn test_insert_child_rejects_stale_parent() {
    let mut tree = BinaryTree::new();
    let old_root = tree.insert_root(1);
    tree.insert_root(2); // clears the arena
    assert!(tree.insert_child(old_root, Side::Left, 3).is_none());
}

#[rstest]
fn test_render() {
    assert_eq!(BinaryTree::new().render(), "(empty)");
    let rendered = sample_tree().render();
    assert!(rendered.starts_with('3'));
    assert!(rendered.contains("20"));
    assert!(rendered.contains("15"));
}
