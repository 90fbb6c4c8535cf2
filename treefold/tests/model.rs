use serde_json::json;

use treefold::prelude::*;

// ============================================================================
// Node serialization
// ============================================================================

#[test]
fn test_leaf_serializes_without_children() {
    let value = serde_json::to_value(TreeNode::leaf("A", "a")).unwrap();
    assert_eq!(value, json!({ "label": "A", "value": "a" }));
}

#[test]
fn test_branch_omits_absent_collapsed() {
    let node = TreeNode::branch("B", "b", [TreeNode::leaf("A", "a")]);
    let value = serde_json::to_value(&node).unwrap();
    assert_eq!(
        value,
        json!({ "label": "B", "value": "b", "children": [{ "label": "A", "value": "a" }] })
    );

    let value = serde_json::to_value(node.collapsed(true)).unwrap();
    assert_eq!(value["collapsed"], json!(true));
}

#[test]
fn test_node_kind_follows_children_key() {
    let node: TreeNode = serde_json::from_value(json!({ "label": "x", "value": "x" })).unwrap();
    assert!(!node.is_branch());

    let node: TreeNode =
        serde_json::from_value(json!({ "label": "x", "value": "x", "children": [] })).unwrap();
    assert!(node.is_branch());
    assert!(node.children().is_empty());
    assert!(!node.is_collapsed());
}

#[test]
fn test_tree_round_trips_through_json() {
    let tree = Tree::new(TreeNode::branch(
        "root",
        "root",
        [
            TreeNode::branch("b", "b", [TreeNode::leaf("c", "c")]).collapsed(true),
            TreeNode::leaf("d", "d"),
        ],
    ));
    let value = tree.to_value().unwrap();
    assert_eq!(Tree::from_value(value).unwrap(), tree);
}

// ============================================================================
// Tree::from_value
// ============================================================================

#[test]
fn test_from_value_rejects_bad_nested_node() {
    let err = Tree::from_value(json!({
        "root": {
            "label": "r",
            "value": "r",
            "children": [{ "label": "x", "value": "x", "children": [], "collapsed": "no" }]
        }
    }))
    .unwrap_err();

    match err {
        TreeError::Shape(shape) => assert_eq!(shape.at(), "/root/children/0"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_try_from_value() {
    let tree = Tree::try_from(json!({ "root": { "label": "r", "value": "r" } })).unwrap();
    assert_eq!(tree.root().label(), "r");
    assert!(Tree::try_from(json!({ "root": 5 })).is_err());
}

#[test]
fn test_error_display() {
    let err = TreeError::from(ShapeError::MissingField {
        at: "/root".to_string(),
        field: "label",
    });
    let display = err.to_string();
    assert!(display.contains("label"));
    assert!(display.contains("/root"));
}

// ============================================================================
// Items
// ============================================================================

#[test]
fn test_items_serialize_with_type_tag() {
    let tree = Tree::new(TreeNode::branch("R", "r", [TreeNode::leaf("A", "a")]));
    let value = serde_json::to_value(visible_items(&tree)).unwrap();
    assert_eq!(
        value,
        json!([
            { "type": "branch", "label": "R", "value": "r", "path": [], "collapsed": false },
            { "type": "leaf", "label": "A", "value": "a", "path": ["a"] }
        ])
    );
    for item in value.as_array().unwrap() {
        assert!(treefold::validate::is_tree_item(item));
    }
}

#[test]
fn test_item_deserializes_from_tag() {
    let item: TreeItem = serde_json::from_value(json!({
        "type": "branch",
        "label": "b",
        "value": "b",
        "path": ["b"],
        "collapsed": true
    }))
    .unwrap();
    assert_eq!(item.collapsed(), Some(true));
    assert!(!item.is_root());
}

#[test]
fn test_collapsed_on_leaf_is_ignored() {
    let node = TreeNode::leaf("a", "a").collapsed(true);
    assert_eq!(node, TreeNode::leaf("a", "a"));
}
