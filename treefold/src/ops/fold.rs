//! Expand and collapse.

use std::sync::Arc;

use log::{debug, trace};

use crate::model::{Tree, TreeBranch, TreeNode};

/// Expand the branch at `path`.
///
/// The returned tree copies only the nodes from the root down to the target;
/// every other subtree is shared with `tree`. Leaves and paths that do not
/// resolve are left unchanged. The empty path targets the root.
pub fn expand_node<S: AsRef<str>>(tree: &Tree, path: &[S]) -> Tree {
    Tree::from_shared(update_at(&tree.root, path, &|branch: &TreeBranch| {
        branch.with_collapsed(false)
    }))
}

/// Collapse the branch at `path`. Same sharing rules as [`expand_node`].
pub fn collapse_node<S: AsRef<str>>(tree: &Tree, path: &[S]) -> Tree {
    Tree::from_shared(update_at(&tree.root, path, &|branch: &TreeBranch| {
        branch.with_collapsed(true)
    }))
}

/// Flip the branch at `path`. A branch without a collapse flag counts as
/// expanded, so its first toggle collapses it.
pub fn toggle_node<S: AsRef<str>>(tree: &Tree, path: &[S]) -> Tree {
    Tree::from_shared(update_at(&tree.root, path, &|branch: &TreeBranch| {
        branch.with_collapsed(!branch.is_collapsed())
    }))
}

/// Expand every branch in the tree.
pub fn expand_all(tree: &Tree) -> Tree {
    debug!("expand_all: {} nodes", tree.node_count());
    Tree::from_shared(set_all(&tree.root, false))
}

/// Collapse every branch in the tree.
pub fn collapse_all(tree: &Tree) -> Tree {
    debug!("collapse_all: {} nodes", tree.node_count());
    Tree::from_shared(set_all(&tree.root, true))
}

/// Apply `update` to the branch at `path`, copying only the nodes on the way.
fn update_at<S, F>(node: &Arc<TreeNode>, path: &[S], update: &F) -> Arc<TreeNode>
where
    S: AsRef<str>,
    F: Fn(&TreeBranch) -> TreeBranch,
{
    let Some((segment, rest)) = path.split_first() else {
        return match node.as_ref() {
            TreeNode::Branch(branch) => Arc::new(TreeNode::Branch(update(branch))),
            TreeNode::Leaf(_) => Arc::clone(node),
        };
    };

    let TreeNode::Branch(branch) = node.as_ref() else {
        trace!(
            "path continues past leaf `{}` at segment `{}`",
            node.value(),
            segment.as_ref()
        );
        return Arc::clone(node);
    };

    // First match only, the same node find_node resolves to
    let segment = segment.as_ref();
    let Some(index) = branch.children.iter().position(|c| c.value() == segment) else {
        trace!("no child `{}` under `{}`", segment, branch.value);
        return Arc::clone(node);
    };

    let mut children = branch.children.clone();
    children[index] = update_at(&branch.children[index], rest, update);

    Arc::new(TreeNode::Branch(TreeBranch {
        label: branch.label.clone(),
        value: branch.value.clone(),
        children,
        collapsed: branch.collapsed,
    }))
}

/// Force the collapse flag on every branch. Leaves are shared.
fn set_all(node: &Arc<TreeNode>, collapsed: bool) -> Arc<TreeNode> {
    match node.as_ref() {
        TreeNode::Leaf(_) => Arc::clone(node),
        TreeNode::Branch(branch) => Arc::new(TreeNode::Branch(TreeBranch {
            label: branch.label.clone(),
            value: branch.value.clone(),
            children: branch
                .children
                .iter()
                .map(|child| set_all(child, collapsed))
                .collect(),
            collapsed: Some(collapsed),
        })),
    }
}
