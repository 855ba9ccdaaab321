//! Required/optional marking against a level's `required` list

use vouch_core::SchemaNode;
use vouch_runtime::Validator;

/// Failure message for a missing required field.
pub const REQUIRED_MESSAGE: &str = "This is required";

/// Mark `validator` required when `key` appears in the enclosing level's
/// `required` array. Every leaf constructor finishes through here.
pub fn apply_required(validator: Validator, level: SchemaNode, key: &str) -> Validator {
    if level.requires(key) {
        validator.with_required(REQUIRED_MESSAGE)
    } else {
        validator
    }
}
