//! Turning visible rows into display lines.
//!
//! # Example
//!
//! ```
//! use treefold::prelude::*;
//!
//! let renderer = Renderer::with_options(
//!     RenderOptions::default()
//!         .indent("  ")
//!         .leaf_symbol("- ")
//!         .branch_symbol(Symbol::dynamic(|item: &TreeBranchItem| {
//!             if item.collapsed { "> ".to_string() } else { "v ".to_string() }
//!         })),
//! );
//!
//! let item = TreeItem::Branch(TreeBranchItem {
//!     label: "src".into(),
//!     value: "src".into(),
//!     path: vec!["src".into()],
//!     collapsed: true,
//! });
//! assert_eq!(renderer.render_item(&item), "> src");
//! ```

mod options;
mod symbol;

pub use options::{
    COLLAPSED_BRANCH_SYMBOL, DEFAULT_INDENT, DEFAULT_LEAF_SYMBOL, DEFAULT_ROOT_SYMBOL, DepthFn,
    EXPANDED_BRANCH_SYMBOL, RenderOptions, default_branch_symbol, default_depth,
};
pub use symbol::Symbol;

use std::borrow::Cow;

use log::trace;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::{Tree, TreeItem};
use crate::ops::visible_items;

/// Renders flattened rows as `indent * depth + symbol + label`.
///
/// The root row (empty path) always uses the root symbol; other rows use the
/// leaf or branch symbol.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render one line per item, in order.
    pub fn render(&self, items: &[TreeItem]) -> Vec<String> {
        trace!("rendering {} items", items.len());
        items.iter().map(|item| self.render_item(item)).collect()
    }

    /// Render a single row.
    pub fn render_item(&self, item: &TreeItem) -> String {
        let depth = (self.options.depth)(item);

        let symbol = match item {
            _ if item.is_root() => Cow::Borrowed(self.options.root_symbol.as_str()),
            TreeItem::Leaf(leaf) => self.options.leaf_symbol.resolve(leaf),
            TreeItem::Branch(branch) => self.options.branch_symbol.resolve(branch),
        };

        let indent = self.options.indent.repeat(depth);
        let Some(max_width) = self.options.max_width else {
            return format!("{indent}{symbol}{}", item.label());
        };

        // Keep the guides and cut the label; drop the indent before the
        // symbol when there is no room left for the label at all.
        let label = item.label();
        let prefix_width = indent.width() + symbol.width();
        if prefix_width + label.width() <= max_width {
            format!("{indent}{symbol}{label}")
        } else if prefix_width < max_width {
            format!("{indent}{symbol}{}", fit_label(label, max_width - prefix_width))
        } else if symbol.width() < max_width {
            format!("{symbol}{}", fit_label(label, max_width - symbol.width()))
        } else {
            fit_label(label, max_width)
        }
    }

    /// Flatten `tree` and render the visible rows.
    pub fn render_tree(&self, tree: &Tree) -> Vec<String> {
        self.render(&visible_items(tree))
    }
}

/// Cut `label` to `width` columns, ending in `…` when shortened.
fn fit_label(label: &str, width: usize) -> String {
    if label.width() <= width {
        return label.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut fitted = String::new();
    let mut used = 0;
    for ch in label.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width >= width {
            break;
        }
        fitted.push(ch);
        used += ch_width;
    }
    fitted.push('…');
    fitted
}
