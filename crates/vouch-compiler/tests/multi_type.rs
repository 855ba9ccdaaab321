//! Multi-type fields resolved per runtime value

use serde_json::{json, Value};
use vouch_compiler::{convert, Validator};

fn first_message(validator: &Validator, value: &Value) -> String {
    validator
        .validate(value)
        .unwrap_err()
        .into_iter()
        .next()
        .unwrap()
        .message
}

#[test]
fn test_string_or_null() {
    let document = json!({
        "type": "object",
        "properties": {
            "name": { "type": ["string", "null"] }
        }
    });
    let validator = convert(&document).unwrap();

    assert!(validator.is_valid(&json!({ "name": "test" })));
    assert!(validator.is_valid(&json!({ "name": null })));
}

#[test]
fn test_object_or_null() {
    let document = json!({
        "type": "object",
        "properties": {
            "address": {
                "type": ["object", "null"],
                "properties": {
                    "state": { "type": "string" }
                }
            }
        }
    });
    let validator = convert(&document).unwrap();

    assert!(validator.is_valid(&json!({ "address": { "state": "VIC" } })));
    assert!(validator.is_valid(&json!({ "address": null })));
}

#[test]
fn test_unmatched_value_reports_its_kind() {
    let document = json!({
        "type": "object",
        "properties": {
            "name": { "type": ["string", "null"] }
        }
    });
    let validator = convert(&document).unwrap();

    assert!(!validator.is_valid(&json!({ "name": 5 })));
    assert_eq!(
        first_message(&validator, &json!({ "name": 5 })),
        "number data type is not supported"
    );

    assert!(!validator.is_valid(&json!({ "name": [] })));
    assert_eq!(
        first_message(&validator, &json!({ "name": [] })),
        "array data type is not supported"
    );
}

#[test]
fn test_candidate_constraints_apply_to_the_selected_type() {
    let document = json!({
        "type": "object",
        "properties": {
            "name": { "type": ["string", "null"], "minLength": 3 }
        }
    });
    let validator = convert(&document).unwrap();

    assert!(validator.is_valid(&json!({ "name": "abc" })));
    assert!(!validator.is_valid(&json!({ "name": "ab" })));
    // The null candidate carries no string constraints
    assert!(validator.is_valid(&json!({ "name": null })));
}

#[test]
fn test_declared_order_decides_between_overlapping_kinds() {
    let document = json!({
        "type": "object",
        "properties": {
            "count": { "type": ["integer", "number"], "minimum": 5 }
        }
    });
    let validator = convert(&document).unwrap();

    // 6 is integral, so the integer candidate wins; 5.5 falls through to
    // the number candidate.
    assert!(validator.is_valid(&json!({ "count": 6 })));
    assert!(validator.is_valid(&json!({ "count": 5.5 })));
    assert!(!validator.is_valid(&json!({ "count": 4 })));
    assert!(!validator.is_valid(&json!({ "count": 4.5 })));
}
