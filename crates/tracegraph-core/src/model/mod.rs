pub mod message;
pub mod tree;

pub use message::Message;
pub use tree::{FlatNode, TreeNode};
