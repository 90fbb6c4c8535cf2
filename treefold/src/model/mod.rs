//! Tree data model and the flattened items produced from it.

mod item;
mod node;

pub use item::{TreeBranchItem, TreeItem, TreeLeafItem};
pub use node::{Tree, TreeBranch, TreeLeaf, TreeNode};
