//! Pure operations over [`Tree`](crate::Tree) values.
//!
//! Nothing here mutates its input or fails. A path that does not resolve
//! leaves the tree as it is.

mod find;
mod flatten;
mod fold;

pub use find::find_node;
pub use flatten::visible_items;
pub use fold::{collapse_all, collapse_node, expand_all, expand_node, toggle_node};

use crate::model::{Tree, TreeItem, TreeNode};

/// The empty path, addressing the root.
pub const ROOT_PATH: &[&str] = &[];

impl Tree {
    /// See [`expand_node`].
    pub fn expand<S: AsRef<str>>(&self, path: &[S]) -> Tree {
        expand_node(self, path)
    }

    /// See [`collapse_node`].
    pub fn collapse<S: AsRef<str>>(&self, path: &[S]) -> Tree {
        collapse_node(self, path)
    }

    /// See [`toggle_node`].
    pub fn toggle<S: AsRef<str>>(&self, path: &[S]) -> Tree {
        toggle_node(self, path)
    }

    /// See [`find_node`].
    pub fn find<S: AsRef<str>>(&self, path: &[S]) -> Option<&TreeNode> {
        find_node(self, path)
    }

    /// See [`visible_items`].
    pub fn visible_items(&self) -> Vec<TreeItem> {
        visible_items(self)
    }
}
