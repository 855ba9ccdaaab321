//! Number and integer field compilation and validation

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
fn test_number_type() {
    let document = json!({
        "type": "object",
        "properties": {
            "count": { "type": "number" }
        }
    });
    let validator = convert(&document).unwrap();

    assert!(validator.is_valid(&json!({ "count": 1 })));
    assert!(validator.is_valid(&json!({ "count": 2.36 })));
    assert!(!validator.is_valid(&json!({ "count": "1" })));
    assert!(!validator.is_valid(&json!({ "count": null })));
}

#[test]
fn test_number_minimum() {
    let document = json!({
        "type": "object",
        "properties": {
            "count": { "type": "number", "minimum": 5 }
        }
    });
    let validator = convert(&document).unwrap();

    assert!(validator.is_valid(&json!({ "count": 5 })));
    assert!(validator.is_valid(&json!({ "count": 6.5 })));
    assert!(!validator.is_valid(&json!({ "count": 4 })));
    assert_eq!(
        first_message(&validator, &json!({ "count": 4 })),
        "A minimum value of 5 required"
    );
}

#[test]
fn test_number_maximum() {
    let document = json!({
        "type": "object",
        "properties": {
            "count": { "type": "number", "maximum": 5 }
        }
    });
    let validator = convert(&document).unwrap();

    assert!(validator.is_valid(&json!({ "count": 5 })));
    assert!(!validator.is_valid(&json!({ "count": 5.1 })));
    assert_eq!(
        first_message(&validator, &json!({ "count": 6 })),
        "A maximum value of 5 required"
    );
}

#[test]
fn test_number_default_satisfies_required() {
    let document = json!({
        "type": "object",
        "properties": {
            "count": { "type": "number", "default": 7 }
        },
        "required": ["count"]
    });
    let validator = convert(&document).unwrap();

    assert!(validator.is_valid(&json!({})));
}

#[test]
fn test_integer_rejects_non_integral_values() {
    let document = json!({
        "type": "object",
        "properties": {
            "count": { "type": "integer" }
        }
    });
    let validator = convert(&document).unwrap();

    assert!(validator.is_valid(&json!({ "count": 6 })));
    // A whole-number float is integral
    assert!(validator.is_valid(&json!({ "count": 50.0 })));
    assert!(!validator.is_valid(&json!({ "count": 3.56 })));
    // Numeric strings are rejected outright
    assert!(!validator.is_valid(&json!({ "count": "6" })));
}

#[test]
fn test_integer_composes_number_bounds() {
    let document = json!({
        "type": "object",
        "properties": {
            "count": { "type": "integer", "minimum": 5, "maximum": 10 }
        }
    });
    let validator = convert(&document).unwrap();

    assert!(validator.is_valid(&json!({ "count": 5 })));
    assert!(validator.is_valid(&json!({ "count": 10 })));
    assert!(!validator.is_valid(&json!({ "count": 4 })));
    assert!(!validator.is_valid(&json!({ "count": 11 })));
    assert_eq!(
        first_message(&validator, &json!({ "count": 4 })),
        "A minimum value of 5 required"
    );
}

#[test]
fn test_integer_required() {
    let document = json!({
        "type": "object",
        "properties": {
            "count": { "type": "integer" }
        },
        "required": ["count"]
    });
    let validator = convert(&document).unwrap();

    assert!(!validator.is_valid(&json!({})));
    assert_eq!(first_message(&validator, &json!({})), "This is required");
}
