//! Tree nodes.

use std::sync::Arc;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::error::TreeError;
use crate::validate;

/// A terminal node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeLeaf {
    /// Display text.
    pub label: String,
    /// Identifier, unique among siblings. Paths are made of these.
    pub value: String,
}

impl TreeLeaf {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A node owning an ordered list of children.
///
/// Children are held behind [`Arc`] so that folding operations can share
/// every subtree they do not touch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeBranch {
    /// Display text.
    pub label: String,
    /// Identifier, unique among siblings.
    pub value: String,
    /// Child nodes in display order.
    pub children: Vec<Arc<TreeNode>>,
    /// Collapse flag. `None` reads as expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

impl TreeBranch {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        children: impl IntoIterator<Item = TreeNode>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            children: children.into_iter().map(Arc::new).collect(),
            collapsed: None,
        }
    }

    /// Whether the branch hides its children.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed.unwrap_or(false)
    }

    /// Copy of this branch with the collapse flag set explicitly.
    ///
    /// The children vector is cloned shallowly; every child stays shared.
    pub fn with_collapsed(&self, collapsed: bool) -> Self {
        Self {
            label: self.label.clone(),
            value: self.value.clone(),
            children: self.children.clone(),
            collapsed: Some(collapsed),
        }
    }
}

/// Either a [`TreeLeaf`] or a [`TreeBranch`].
///
/// Serialized structurally: a node is a branch exactly when it has a
/// `children` key, there is no tag field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TreeNode {
    Leaf(TreeLeaf),
    Branch(TreeBranch),
}

impl TreeNode {
    /// Create a leaf node.
    pub fn leaf(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Leaf(TreeLeaf::new(label, value))
    }

    /// Create an expanded branch node.
    pub fn branch(
        label: impl Into<String>,
        value: impl Into<String>,
        children: impl IntoIterator<Item = TreeNode>,
    ) -> Self {
        Self::Branch(TreeBranch::new(label, value, children))
    }

    /// Set the collapse flag. Has no effect on leaves.
    pub fn collapsed(self, collapsed: bool) -> Self {
        match self {
            Self::Branch(mut branch) => {
                branch.collapsed = Some(collapsed);
                Self::Branch(branch)
            }
            leaf => leaf,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.label,
            Self::Branch(branch) => &branch.label,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.value,
            Self::Branch(branch) => &branch.value,
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(_))
    }

    /// Child nodes. Empty for leaves.
    pub fn children(&self) -> &[Arc<TreeNode>] {
        match self {
            Self::Leaf(_) => &[],
            Self::Branch(branch) => &branch.children,
        }
    }

    /// Whether this node is a collapsed branch.
    pub fn is_collapsed(&self) -> bool {
        match self {
            Self::Leaf(_) => false,
            Self::Branch(branch) => branch.is_collapsed(),
        }
    }

    /// Number of nodes in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(|c| c.count()).sum::<usize>()
    }
}

impl From<TreeLeaf> for TreeNode {
    fn from(leaf: TreeLeaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<TreeBranch> for TreeNode {
    fn from(branch: TreeBranch) -> Self {
        Self::Branch(branch)
    }
}

/// Wire form of a node, before deciding leaf or branch.
#[derive(Deserialize)]
struct RawNode {
    label: String,
    value: String,
    #[serde(default)]
    children: Option<Vec<Arc<TreeNode>>>,
    #[serde(default)]
    collapsed: Option<bool>,
}

impl From<RawNode> for TreeNode {
    fn from(raw: RawNode) -> Self {
        match raw.children {
            Some(children) => Self::Branch(TreeBranch {
                label: raw.label,
                value: raw.value,
                children,
                collapsed: raw.collapsed,
            }),
            None => Self::Leaf(TreeLeaf {
                label: raw.label,
                value: raw.value,
            }),
        }
    }
}

impl<'de> Deserialize<'de> for TreeNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawNode::deserialize(deserializer).map(TreeNode::from)
    }
}

/// A whole tree. Cloning is cheap; the root is shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub root: Arc<TreeNode>,
}

impl Tree {
    pub fn new(root: impl Into<TreeNode>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    /// Wrap an already shared root.
    pub fn from_shared(root: Arc<TreeNode>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Total number of nodes, collapsed or not.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    /// Build a tree from untyped data.
    ///
    /// The value is validated recursively first, so a malformed node
    /// anywhere in the tree is reported with its location instead of being
    /// silently read as something else.
    pub fn from_value(value: serde_json::Value) -> Result<Self, TreeError> {
        validate::check_tree_strict(&value)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Encode this tree as untyped data.
    pub fn to_value(&self) -> Result<serde_json::Value, TreeError> {
        Ok(serde_json::to_value(self)?)
    }
}

impl TryFrom<serde_json::Value> for Tree {
    type Error = TreeError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}
