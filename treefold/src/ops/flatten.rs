//! Flattening into visible rows.

use log::debug;

use crate::model::{Tree, TreeBranchItem, TreeItem, TreeLeafItem, TreeNode};

/// Flatten `tree` into the rows a tree view shows, depth-first, parents
/// before children.
///
/// Children of a collapsed branch are skipped along with everything below
/// them. Each row's path is its parent's path plus its own value; the
/// root's path is empty.
pub fn visible_items(tree: &Tree) -> Vec<TreeItem> {
    let mut out = Vec::new();
    collect_visible(tree.root(), Vec::new(), &mut out);
    debug!(
        "visible_items: {} of {} nodes visible",
        out.len(),
        tree.node_count()
    );
    out
}

/// Recursively collect visible nodes into the flat list.
fn collect_visible(node: &TreeNode, path: Vec<String>, out: &mut Vec<TreeItem>) {
    match node {
        TreeNode::Leaf(leaf) => out.push(TreeItem::Leaf(TreeLeafItem {
            label: leaf.label.clone(),
            value: leaf.value.clone(),
            path,
        })),
        TreeNode::Branch(branch) => {
            let collapsed = branch.is_collapsed();
            out.push(TreeItem::Branch(TreeBranchItem {
                label: branch.label.clone(),
                value: branch.value.clone(),
                path: path.clone(),
                collapsed,
            }));

            if collapsed {
                return;
            }
            for child in &branch.children {
                let mut child_path = path.clone();
                child_path.push(child.value().to_string());
                collect_visible(child, child_path, out);
            }
        }
    }
}
