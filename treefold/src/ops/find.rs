use crate::model::{Tree, TreeNode};

/// Resolve `path` to a node. The empty path returns the root.
///
/// When siblings share a value the first one wins.
pub fn find_node<'a, S: AsRef<str>>(tree: &'a Tree, path: &[S]) -> Option<&'a TreeNode> {
    path.iter().try_fold(tree.root(), |node, segment| {
        node.children()
            .iter()
            .find(|child| child.value() == segment.as_ref())
            .map(|child| &**child)
    })
}
