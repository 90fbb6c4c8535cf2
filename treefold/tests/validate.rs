use serde_json::json;

use treefold::ShapeError;
use treefold::validate::*;

// ============================================================================
// Nodes
// ============================================================================

#[test]
fn test_leaf_accepts_label_and_value() {
    assert!(is_tree_leaf(&json!({ "label": "a", "value": "a" })));
}

#[test]
fn test_leaf_rejects_children_key() {
    assert!(!is_tree_leaf(&json!({ "label": "a", "value": "a", "children": [] })));
    assert_eq!(
        check_tree_leaf(&json!({ "label": "a", "value": "a", "children": [] })),
        Err(ShapeError::UnexpectedChildren { at: String::new() })
    );
}

#[test]
fn test_leaf_rejects_wrong_field_types() {
    assert!(!is_tree_leaf(&json!({ "label": 1, "value": "a" })));
    assert!(!is_tree_leaf(&json!({ "label": "a" })));
    assert_eq!(
        check_tree_leaf(&json!({ "label": "a" })),
        Err(ShapeError::MissingField {
            at: String::new(),
            field: "value"
        })
    );
}

#[test]
fn test_non_objects_are_rejected() {
    for value in [json!(null), json!(1), json!("leaf"), json!(true), json!([])] {
        assert!(!is_tree_leaf(&value));
        assert!(!is_tree_branch(&value));
        assert!(!is_tree_node(&value));
        assert!(!is_tree_node_strict(&value));
        assert!(!is_tree(&value));
        assert!(!is_tree_item(&value));
    }
}

#[test]
fn test_branch_collapsed_is_optional() {
    assert!(is_tree_branch(&json!({ "label": "b", "value": "b", "children": [] })));
    assert!(is_tree_branch(
        &json!({ "label": "b", "value": "b", "children": [], "collapsed": true })
    ));
}

#[test]
fn test_branch_collapsed_must_be_bool() {
    let value = json!({ "label": "b", "value": "b", "children": [], "collapsed": "yes" });
    assert!(!is_tree_branch(&value));
    assert_eq!(
        check_tree_branch(&value),
        Err(ShapeError::WrongType {
            at: String::new(),
            field: "collapsed",
            expected: "a boolean"
        })
    );

    let value = json!({ "label": "b", "value": "b", "children": [], "collapsed": null });
    assert!(!is_tree_branch(&value));
}

#[test]
fn test_branch_children_must_be_array() {
    assert!(!is_tree_branch(&json!({ "label": "b", "value": "b", "children": {} })));
    assert!(!is_tree_branch(&json!({ "label": "b", "value": "b" })));
}

#[test]
fn test_non_strict_branch_ignores_children() {
    let value = json!({
        "label": "b",
        "value": "b",
        "children": [42, { "nope": true }]
    });
    assert!(is_tree_branch(&value));
    assert!(is_tree_node(&value));
    assert!(!is_tree_branch_strict(&value));
    assert!(!is_tree_node_strict(&value));
}

#[test]
fn test_strict_recurses_into_descendants() {
    let valid = json!({
        "label": "root",
        "value": "root",
        "children": [
            { "label": "a", "value": "a" },
            {
                "label": "b",
                "value": "b",
                "collapsed": false,
                "children": [{ "label": "c", "value": "c" }]
            }
        ]
    });
    assert!(is_tree_branch_strict(&valid));
    assert!(is_tree_node_strict(&valid));
}

#[test]
fn test_strict_reports_nested_location() {
    let value = json!({
        "label": "root",
        "value": "root",
        "children": [
            { "label": "a", "value": "a" },
            {
                "label": "b",
                "value": "b",
                "children": [{ "label": "c", "value": 3 }]
            }
        ]
    });
    let err = check_tree_node_strict(&value).unwrap_err();
    assert_eq!(err.at(), "/children/1/children/0");
    assert_eq!(
        err,
        ShapeError::WrongType {
            at: "/children/1/children/0".to_string(),
            field: "value",
            expected: "a string"
        }
    );
}

#[test]
fn test_node_accepts_leaf_or_branch() {
    assert!(is_tree_node(&json!({ "label": "a", "value": "a" })));
    assert!(is_tree_node(&json!({ "label": "a", "value": "a", "children": [] })));
    assert!(!is_tree_node(&json!({ "label": "a" })));
}

#[test]
fn test_tree_validates_root_shallowly() {
    assert!(is_tree(&json!({ "root": { "label": "r", "value": "r" } })));
    assert!(is_tree(&json!({
        "root": { "label": "r", "value": "r", "children": [null] }
    })));
    assert!(!is_tree_strict(&json!({
        "root": { "label": "r", "value": "r", "children": [null] }
    })));
    assert!(!is_tree(&json!({})));
    assert!(!is_tree(&json!({ "root": null })));
}

#[test]
fn test_tree_strict_error_location() {
    let err = check_tree_strict(&json!({
        "root": { "label": "r", "value": "r", "children": [null] }
    }))
    .unwrap_err();
    assert_eq!(
        err,
        ShapeError::NotAnObject {
            at: "/root/children/0".to_string()
        }
    );
}

// ============================================================================
// Items
// ============================================================================

#[test]
fn test_leaf_item() {
    let value = json!({ "label": "a", "value": "a", "path": ["a"], "type": "leaf" });
    assert!(is_tree_item(&value));
    assert!(is_tree_leaf_item(&value));
    assert!(!is_tree_branch_item(&value));
}

#[test]
fn test_branch_item_requires_collapsed() {
    let value = json!({ "label": "b", "value": "b", "path": [], "type": "branch" });
    assert!(!is_tree_item(&value));
    assert!(!is_tree_branch_item(&value));

    let value = json!({
        "label": "b",
        "value": "b",
        "path": [],
        "type": "branch",
        "collapsed": false
    });
    assert!(is_tree_item(&value));
    assert!(is_tree_branch_item(&value));
    assert!(!is_tree_leaf_item(&value));
}

#[test]
fn test_item_rejects_unknown_type() {
    let value = json!({ "label": "a", "value": "a", "path": [], "type": "twig" });
    assert!(!is_tree_item(&value));
    assert_eq!(
        check_tree_item(&value),
        Err(ShapeError::UnexpectedItemType {
            at: String::new(),
            found: "twig".to_string()
        })
    );
}

#[test]
fn test_item_rejects_missing_type() {
    let value = json!({ "label": "a", "value": "a", "path": [] });
    assert!(!is_tree_item(&value));
}

#[test]
fn test_item_path_must_be_strings() {
    let value = json!({ "label": "a", "value": "a", "path": ["x", 2], "type": "leaf" });
    assert!(!is_tree_item(&value));
    assert_eq!(check_tree_item(&value).unwrap_err().at(), "/path/1");

    let value = json!({ "label": "a", "value": "a", "path": "x", "type": "leaf" });
    assert!(!is_tree_item(&value));
}

#[test]
fn test_validation_does_not_mutate() {
    let value = json!({ "label": "b", "value": "b", "children": [{ "bad": 1 }] });
    let before = value.clone();
    let _ = is_tree_node_strict(&value);
    assert_eq!(value, before);
}
