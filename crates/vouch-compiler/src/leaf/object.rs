//! Propertyless object validator construction

use vouch_core::{BuildError, SchemaNode};
use vouch_runtime::{ObjectValidator, Validator};

use crate::required::apply_required;

/// Accepts any plain object. Object schemas that carry `properties` never
/// reach this constructor; the builder compiles those by recursion.
pub fn compile(key: &str, _node: SchemaNode, level: SchemaNode) -> Result<Validator, BuildError> {
    Ok(apply_required(
        Validator::Object(ObjectValidator::default()),
        level,
        key,
    ))
}
