//! Immutable, collapsible trees and a line renderer for them.
//!
//! A [`Tree`] is a plain value. Folding operations ([`expand_node`],
//! [`collapse_node`], [`toggle_node`]) return a new tree that shares every
//! untouched subtree with the input. [`visible_items`] flattens the tree into
//! the rows a tree view would show, and a [`Renderer`] turns those rows into
//! strings.
//!
//! # Example
//!
//! ```
//! use treefold::prelude::*;
//!
//! let tree = Tree::new(TreeNode::branch(
//!     "root",
//!     "root",
//!     [
//!         TreeNode::branch("src", "src", [TreeNode::leaf("main.rs", "main.rs")]),
//!         TreeNode::leaf("Cargo.toml", "Cargo.toml"),
//!     ],
//! ));
//!
//! let tree = collapse_node(&tree, &["src"]);
//! let lines = Renderer::new().render(&visible_items(&tree));
//!
//! assert_eq!(lines, vec!["root", "|+ src", "|  Cargo.toml"]);
//! ```

pub mod error;
pub mod model;
pub mod ops;
pub mod render;
pub mod validate;

pub use error::{ShapeError, TreeError};
pub use model::{Tree, TreeBranch, TreeBranchItem, TreeItem, TreeLeaf, TreeLeafItem, TreeNode};
pub use ops::{
    ROOT_PATH, collapse_all, collapse_node, expand_all, expand_node, find_node, toggle_node,
    visible_items,
};
pub use render::{RenderOptions, Renderer, Symbol};

pub mod prelude {
    pub use crate::error::{ShapeError, TreeError};
    pub use crate::model::{
        Tree, TreeBranch, TreeBranchItem, TreeItem, TreeLeaf, TreeLeafItem, TreeNode,
    };
    pub use crate::ops::{
        ROOT_PATH, collapse_all, collapse_node, expand_all, expand_node, find_node, toggle_node,
        visible_items,
    };
    pub use crate::render::{RenderOptions, Renderer, Symbol};
}
