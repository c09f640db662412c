use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::debug_utils::DebugFmt;

pub type TreeNodeRef = Rc<RefCell<TreeNode>>;

#[derive(Debug, PartialEq, Eq, Default)]
pub struct TreeNode {
    pub val: i32,
    pub left: Option<TreeNodeRef>,
    pub right: Option<TreeNodeRef>,
}

impl TreeNode {
    #[inline]
    pub fn new(val: i32) -> Self {
        TreeNode {
            val,
            left: None,
            right: None,
        }
    }

    pub fn with_children(val: i32, left: Option<TreeNodeRef>, right: Option<TreeNodeRef>) -> Self {
        TreeNode { val, left, right }
    }

    pub fn into_ref(self) -> TreeNodeRef {
        Rc::new(RefCell::new(self))
    }

    /// Build from the compact level-order form `[1, 2, 3, null, null, 4, 5]`,
    /// where children are only listed for non-null nodes.
    pub fn from_level_order(vals: &[Option<i32>]) -> Option<TreeNodeRef> {
        let mut vals = vals.iter().copied();
        let root = TreeNode::new(vals.next()??).into_ref();
        let mut queue = VecDeque::new();
        queue.push_back(root.clone());
        while let Some(node) = queue.pop_front() {
            if let Some(Some(val)) = vals.next() {
                let left = TreeNode::new(val).into_ref();
                queue.push_back(left.clone());
                node.borrow_mut().left = Some(left);
            }
            if let Some(Some(val)) = vals.next() {
                let right = TreeNode::new(val).into_ref();
                queue.push_back(right.clone());
                node.borrow_mut().right = Some(right);
            }
        }
        Some(root)
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TreeNode({})", self.val)
    }
}

impl DebugFmt for TreeNode {
    fn debug_fmt(&self) -> String {
        self.to_string()
    }
}
