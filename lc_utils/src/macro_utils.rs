/// Dump any number of heterogeneous arguments to stderr on one colored line.
#[macro_export]
macro_rules! debug {
    ($($arg:expr),* $(,)?) => {
        $crate::debug_utils::write_debug_line(&[
            $($crate::debug_utils::DebugFmt::debug_fmt(&$arg)),*
        ])
    };
}

/// `list![1, 2, 3]` builds the chain 1 -> 2 -> 3.
#[macro_export]
macro_rules! list {
    [$($val:expr),* $(,)?] => {
        $crate::list_node::ListNode::from_slice(&[$($val),*])
    };
}

/// `tree![3, 9, 20, null, null, 15, 7]` builds a tree from its level-order
/// form; `null` marks a missing child.
#[macro_export]
macro_rules! tree {
    (@build [$($out:expr),*]) => {
        $crate::tree_node::TreeNode::from_level_order(&[$($out),*])
    };
    (@build [$($out:expr),*] null $(, $($rest:tt)*)?) => {
        $crate::tree!(@build [$($out,)* ::core::option::Option::None] $($($rest)*)?)
    };
    (@build [$($out:expr),*] $val:expr $(, $($rest:tt)*)?) => {
        $crate::tree!(@build [$($out,)* ::core::option::Option::Some($val)] $($($rest)*)?)
    };
    [$($t:tt)*] => {
        $crate::tree!(@build [] $($t)*)
    };
}
