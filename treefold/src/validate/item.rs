use serde_json::Value;

use super::{Object, bool_field, field, labelled, object, string_field, wrong_type};
use crate::error::ShapeError;

const LEAF: &str = "leaf";
const BRANCH: &str = "branch";

fn path(obj: &Object) -> Result<(), ShapeError> {
    let segments = field(obj, "path", "")?
        .as_array()
        .ok_or_else(|| wrong_type("path", "an array of strings", ""))?;

    match segments.iter().position(|s| !s.is_string()) {
        Some(index) => Err(wrong_type("path", "a string", &format!("/path/{index}"))),
        None => Ok(()),
    }
}

fn unexpected(found: &str) -> ShapeError {
    ShapeError::UnexpectedItemType {
        at: String::new(),
        found: found.to_string(),
    }
}

/// Shared checks, then the `type` tag. Returns the tag.
fn item(value: &Value) -> Result<&str, ShapeError> {
    let obj = object(value, "")?;
    labelled(obj, "")?;
    path(obj)?;

    match string_field(obj, "type", "")? {
        LEAF => Ok(LEAF),
        BRANCH => {
            bool_field(obj, "collapsed", "")?;
            Ok(BRANCH)
        }
        other => Err(unexpected(other)),
    }
}

fn item_of(value: &Value, expected: &str) -> Result<(), ShapeError> {
    match item(value)? {
        kind if kind == expected => Ok(()),
        kind => Err(unexpected(kind)),
    }
}

pub fn check_tree_item(value: &Value) -> Result<(), ShapeError> {
    item(value).map(|_| ())
}

pub fn check_tree_leaf_item(value: &Value) -> Result<(), ShapeError> {
    item_of(value, LEAF)
}

pub fn check_tree_branch_item(value: &Value) -> Result<(), ShapeError> {
    item_of(value, BRANCH)
}

/// `{ label, value, path: [string], type: "leaf" }`, or a branch item.
pub fn is_tree_item(value: &Value) -> bool {
    check_tree_item(value).is_ok()
}

pub fn is_tree_leaf_item(value: &Value) -> bool {
    check_tree_leaf_item(value).is_ok()
}

/// `{ label, value, path: [string], type: "branch", collapsed: bool }`.
pub fn is_tree_branch_item(value: &Value) -> bool {
    check_tree_branch_item(value).is_ok()
}
