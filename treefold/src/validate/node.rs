use serde_json::Value;

use super::{Object, bool_field, child_at, field, labelled, object, wrong_type};
use crate::error::ShapeError;

/// Validation depth for branch children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Depth {
    Shallow,
    Recursive,
}

fn leaf(obj: &Object, at: &str) -> Result<(), ShapeError> {
    if obj.contains_key("children") {
        return Err(ShapeError::UnexpectedChildren { at: at.to_string() });
    }
    labelled(obj, at)
}

fn branch(obj: &Object, at: &str, depth: Depth) -> Result<(), ShapeError> {
    labelled(obj, at)?;

    let children = field(obj, "children", at)?
        .as_array()
        .ok_or_else(|| wrong_type("children", "an array", at))?;

    if obj.contains_key("collapsed") {
        bool_field(obj, "collapsed", at)?;
    }

    if depth == Depth::Recursive {
        for (index, child) in children.iter().enumerate() {
            node(child, &child_at(at, "children", index), depth)?;
        }
    }
    Ok(())
}

/// Leaf and branch are told apart by the presence of `children`.
fn node(value: &Value, at: &str, depth: Depth) -> Result<(), ShapeError> {
    let obj = object(value, at)?;
    if obj.contains_key("children") {
        branch(obj, at, depth)
    } else {
        leaf(obj, at)
    }
}

fn tree(value: &Value, depth: Depth) -> Result<(), ShapeError> {
    let obj = object(value, "")?;
    node(field(obj, "root", "")?, "/root", depth)
}

pub fn check_tree_leaf(value: &Value) -> Result<(), ShapeError> {
    leaf(object(value, "")?, "")
}

pub fn check_tree_branch(value: &Value) -> Result<(), ShapeError> {
    branch(object(value, "")?, "", Depth::Shallow)
}

pub fn check_tree_branch_strict(value: &Value) -> Result<(), ShapeError> {
    branch(object(value, "")?, "", Depth::Recursive)
}

pub fn check_tree_node(value: &Value) -> Result<(), ShapeError> {
    node(value, "", Depth::Shallow)
}

pub fn check_tree_node_strict(value: &Value) -> Result<(), ShapeError> {
    node(value, "", Depth::Recursive)
}

pub fn check_tree(value: &Value) -> Result<(), ShapeError> {
    tree(value, Depth::Shallow)
}

pub fn check_tree_strict(value: &Value) -> Result<(), ShapeError> {
    tree(value, Depth::Recursive)
}

/// `{ label, value }` with no `children` key.
pub fn is_tree_leaf(value: &Value) -> bool {
    check_tree_leaf(value).is_ok()
}

/// `{ label, value, children: [..], collapsed?: bool }`. Children are not inspected.
pub fn is_tree_branch(value: &Value) -> bool {
    check_tree_branch(value).is_ok()
}

/// Like [`is_tree_branch`], and every descendant must be a valid node too.
pub fn is_tree_branch_strict(value: &Value) -> bool {
    check_tree_branch_strict(value).is_ok()
}

pub fn is_tree_node(value: &Value) -> bool {
    check_tree_node(value).is_ok()
}

pub fn is_tree_node_strict(value: &Value) -> bool {
    check_tree_node_strict(value).is_ok()
}

/// `{ root }` where `root` passes [`is_tree_node`].
pub fn is_tree(value: &Value) -> bool {
    check_tree(value).is_ok()
}

/// `{ root }` where `root` passes [`is_tree_node_strict`].
pub fn is_tree_strict(value: &Value) -> bool {
    check_tree_strict(value).is_ok()
}
