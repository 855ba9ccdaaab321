//! Null field compilation and validation

use serde_json::json;
use vouch_compiler::convert;

#[test]
fn test_null_type_accepts_only_null() {
    let document = json!({
        "type": "object",
        "properties": {
            "empty": { "type": "null" }
        }
    });
    let validator = convert(&document).unwrap();

    assert!(validator.is_valid(&json!({ "empty": null })));
    assert!(!validator.is_valid(&json!({ "empty": "null" })));
    assert!(!validator.is_valid(&json!({ "empty": 0 })));
    assert!(!validator.is_valid(&json!({ "empty": false })));
}

#[test]
fn test_null_field_required() {
    let document = json!({
        "type": "object",
        "properties": {
            "empty": { "type": "null" }
        },
        "required": ["empty"]
    });
    let validator = convert(&document).unwrap();

    assert!(validator.is_valid(&json!({ "empty": null })));
    assert!(!validator.is_valid(&json!({})));
}
