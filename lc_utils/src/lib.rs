pub mod debug_utils;
pub mod list_node;
pub mod macro_utils;
pub mod parse_utils;
pub mod tree_node;
