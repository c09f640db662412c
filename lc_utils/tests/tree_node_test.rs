use std::rc::Rc;

use lc_utils::tree;
use lc_utils::tree_node::TreeNode;
use rand::Rng;

#[test]
fn tree_node_default_test() {
    let node = TreeNode::default();
    assert_eq!(0, node.val);
    assert!(node.left.is_none());
    assert!(node.right.is_none());
}

#[test]
fn tree_node_new_test() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let val: i32 = rng.gen();
        let node = TreeNode::new(val);
        assert_eq!(val, node.val);
        assert!(node.left.is_none());
        assert!(node.right.is_none());
    }
}

#[test]
fn tree_node_with_children_test() {
    let left = TreeNode::new(1).into_ref();
    let right = TreeNode::new(3).into_ref();
    let node = TreeNode::with_children(2, Some(left.clone()), Some(right.clone()));

    assert_eq!(2, node.val);
    assert!(Rc::ptr_eq(&left, node.left.as_ref().unwrap()));
    assert!(Rc::ptr_eq(&right, node.right.as_ref().unwrap()));
}

#[test]
fn tree_from_level_order_test() {
    let root = TreeNode::from_level_order(&[
        Some(3),
        Some(9),
        Some(20),
        None,
        None,
        Some(15),
        Some(7),
    ])
    .unwrap();
    let root = root.borrow();
    assert_eq!(3, root.val);

    let left = root.left.as_ref().unwrap().borrow();
    assert_eq!(9, left.val);
    assert!(left.left.is_none());
    assert!(left.right.is_none());

    let right = root.right.as_ref().unwrap().borrow();
    assert_eq!(20, right.val);
    assert_eq!(15, right.left.as_ref().unwrap().borrow().val);
    assert_eq!(7, right.right.as_ref().unwrap().borrow().val);
}

#[test]
fn tree_from_level_order_empty_test() {
    assert!(TreeNode::from_level_order(&[]).is_none());
    assert!(TreeNode::from_level_order(&[None]).is_none());
    assert!(TreeNode::from_level_order(&[None, Some(1)]).is_none());
}

#[test]
fn tree_node_display_test() {
    assert_eq!("TreeNode(5)", TreeNode::new(5).to_string());
}

#[test]
fn tree_macro_test() {
    let built = tree![3, 9, 20, null, null, 15, 7];
    let by_fn = TreeNode::from_level_order(&[
        Some(3),
        Some(9),
        Some(20),
        None,
        None,
        Some(15),
        Some(7),
    ]);
    assert_eq!(by_fn, built);

    assert!(tree![].is_none());
    assert!(tree![null].is_none());
    assert!(tree![-1, null, 2].unwrap().borrow().left.is_none());
}
