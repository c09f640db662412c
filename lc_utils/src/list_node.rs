use std::fmt;

use crate::debug_utils::DebugFmt;

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct ListNode {
    pub val: i32,
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    #[inline]
    pub fn new(val: i32) -> Self {
        ListNode { val, next: None }
    }

    pub fn with_next(val: i32, next: Option<Box<ListNode>>) -> Self {
        ListNode { val, next }
    }

    /// Build a chain holding `vals` in order. An empty slice gives no node.
    pub fn from_slice(vals: &[i32]) -> Option<Box<ListNode>> {
        let mut head = None;
        for &val in vals.iter().rev() {
            head = Some(Box::new(ListNode::with_next(val, head)));
        }
        head
    }

    pub fn to_vec(&self) -> Vec<i32> {
        let mut vals = Vec::new();
        let mut curr = Some(self);
        while let Some(node) = curr {
            vals.push(node.val);
            curr = node.next.as_deref();
        }
        return vals;
    }
}

impl fmt::Display for ListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListNode{:?}", self.to_vec())
    }
}

impl DebugFmt for ListNode {
    fn debug_fmt(&self) -> String {
        self.to_string()
    }
}
