//! Shape checks for untyped tree data.
//!
//! Every `is_*` predicate is total: it returns `false` for `null`,
//! non-objects and missing fields and never panics. The matching `check_*`
//! function returns the first [`ShapeError`] found, with its location.
//!
//! Node checks come in two strengths. The plain ones look at a single node
//! (a branch only needs `children` to be an array). The `_strict` ones also
//! validate every descendant.

mod item;
mod node;

pub use item::{
    check_tree_branch_item, check_tree_item, check_tree_leaf_item, is_tree_branch_item,
    is_tree_item, is_tree_leaf_item,
};
pub use node::{
    check_tree, check_tree_branch, check_tree_branch_strict, check_tree_leaf, check_tree_node,
    check_tree_node_strict, check_tree_strict, is_tree, is_tree_branch, is_tree_branch_strict,
    is_tree_leaf, is_tree_node, is_tree_node_strict, is_tree_strict,
};

use serde_json::Map;
use serde_json::Value;

use crate::error::ShapeError;

type Object = Map<String, Value>;

fn object<'a>(value: &'a Value, at: &str) -> Result<&'a Object, ShapeError> {
    value.as_object().ok_or_else(|| ShapeError::NotAnObject { at: at.to_string() })
}

fn field<'a>(obj: &'a Object, field: &'static str, at: &str) -> Result<&'a Value, ShapeError> {
    obj.get(field).ok_or_else(|| ShapeError::MissingField {
        at: at.to_string(),
        field,
    })
}

fn wrong_type(field: &'static str, expected: &'static str, at: &str) -> ShapeError {
    ShapeError::WrongType {
        at: at.to_string(),
        field,
        expected,
    }
}

fn string_field<'a>(obj: &'a Object, name: &'static str, at: &str) -> Result<&'a str, ShapeError> {
    field(obj, name, at)?
        .as_str()
        .ok_or_else(|| wrong_type(name, "a string", at))
}

fn bool_field(obj: &Object, name: &'static str, at: &str) -> Result<bool, ShapeError> {
    field(obj, name, at)?
        .as_bool()
        .ok_or_else(|| wrong_type(name, "a boolean", at))
}

/// `label` and `value`, shared by nodes and items.
fn labelled(obj: &Object, at: &str) -> Result<(), ShapeError> {
    string_field(obj, "label", at)?;
    string_field(obj, "value", at)?;
    Ok(())
}

fn child_at(at: &str, field: &str, index: usize) -> String {
    format!("{at}/{field}/{index}")
}
