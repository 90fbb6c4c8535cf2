//! Flattened tree rows.

use serde::Deserialize;
use serde::Serialize;

/// A visible leaf row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeLeafItem {
    pub label: String,
    pub value: String,
    /// Values from below the root down to this item, inclusive.
    pub path: Vec<String>,
}

/// A visible branch row. `collapsed` is always materialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeBranchItem {
    pub label: String,
    pub value: String,
    /// Values from below the root down to this item, inclusive.
    pub path: Vec<String>,
    pub collapsed: bool,
}

/// One row of a flattened tree.
///
/// Serialized with an explicit `type` tag of `"leaf"` or `"branch"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeItem {
    Leaf(TreeLeafItem),
    Branch(TreeBranchItem),
}

impl TreeItem {
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf(item) => &item.label,
            Self::Branch(item) => &item.label,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Leaf(item) => &item.value,
            Self::Branch(item) => &item.value,
        }
    }

    pub fn path(&self) -> &[String] {
        match self {
            Self::Leaf(item) => &item.path,
            Self::Branch(item) => &item.path,
        }
    }

    /// Whether this row is the tree root (empty path).
    pub fn is_root(&self) -> bool {
        self.path().is_empty()
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(_))
    }

    /// Collapse state for branches, `None` for leaves.
    pub fn collapsed(&self) -> Option<bool> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(item) => Some(item.collapsed),
        }
    }
}

impl From<TreeLeafItem> for TreeItem {
    fn from(item: TreeLeafItem) -> Self {
        Self::Leaf(item)
    }
}

impl From<TreeBranchItem> for TreeItem {
    fn from(item: TreeBranchItem) -> Self {
        Self::Branch(item)
    }
}
