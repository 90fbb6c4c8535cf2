//! Renderer configuration.

use std::fmt;
use std::sync::Arc;

use super::symbol::Symbol;
use crate::model::{TreeBranchItem, TreeItem, TreeLeafItem};

/// Computes how many indent units precede a row.
pub type DepthFn = Arc<dyn Fn(&TreeItem) -> usize + Send + Sync>;

pub const DEFAULT_INDENT: &str = "|  ";
pub const DEFAULT_ROOT_SYMBOL: &str = "";
pub const DEFAULT_LEAF_SYMBOL: &str = "|  ";
pub const EXPANDED_BRANCH_SYMBOL: &str = "|- ";
pub const COLLAPSED_BRANCH_SYMBOL: &str = "|+ ";

/// One less than the path length, floored at zero, so the root and its
/// direct children share the first column.
pub fn default_depth(item: &TreeItem) -> usize {
    item.path().len().saturating_sub(1)
}

pub fn default_branch_symbol(item: &TreeBranchItem) -> String {
    if item.collapsed {
        COLLAPSED_BRANCH_SYMBOL.to_string()
    } else {
        EXPANDED_BRANCH_SYMBOL.to_string()
    }
}

/// Renderer configuration.
#[derive(Clone)]
pub struct RenderOptions {
    /// Indent units for a row.
    pub depth: DepthFn,
    /// Repeated `depth` times in front of each row.
    pub indent: String,
    /// Prefix for the root row, whatever its kind.
    pub root_symbol: String,
    /// Prefix for non-root leaves.
    pub leaf_symbol: Symbol<TreeLeafItem>,
    /// Prefix for non-root branches.
    pub branch_symbol: Symbol<TreeBranchItem>,
    /// Fit lines into this many display columns by cutting the label.
    pub max_width: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            depth: Arc::new(default_depth),
            indent: DEFAULT_INDENT.to_string(),
            root_symbol: DEFAULT_ROOT_SYMBOL.to_string(),
            leaf_symbol: Symbol::fixed(DEFAULT_LEAF_SYMBOL),
            branch_symbol: Symbol::dynamic(default_branch_symbol),
            max_width: None,
        }
    }
}

impl RenderOptions {
    pub fn depth(mut self, depth: impl Fn(&TreeItem) -> usize + Send + Sync + 'static) -> Self {
        self.depth = Arc::new(depth);
        self
    }

    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn root_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.root_symbol = symbol.into();
        self
    }

    pub fn leaf_symbol(mut self, symbol: impl Into<Symbol<TreeLeafItem>>) -> Self {
        self.leaf_symbol = symbol.into();
        self
    }

    pub fn branch_symbol(mut self, symbol: impl Into<Symbol<TreeBranchItem>>) -> Self {
        self.branch_symbol = symbol.into();
        self
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("depth", &"Fn(&TreeItem) -> usize")
            .field("indent", &self.indent)
            .field("root_symbol", &self.root_symbol)
            .field("leaf_symbol", &self.leaf_symbol)
            .field("branch_symbol", &self.branch_symbol)
            .field("max_width", &self.max_width)
            .finish()
    }
}
