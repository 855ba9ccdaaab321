//! Array validator construction

use tracing::trace;
use vouch_core::{BuildError, SchemaNode};
use vouch_runtime::{ArrayValidator, ContainsRule, Kind, Validator};

use crate::required::apply_required;

pub fn compile(key: &str, node: SchemaNode, level: SchemaNode) -> Result<Validator, BuildError> {
    if node.items().is_some() {
        trace!(key = %key, "array items sub-schema present; per-element validation is not supported");
    }

    let contains = match node.contains() {
        Some(contains_node) => Some(contains_rule(contains_node)?),
        None => None,
    };
    let validator = Validator::Array(ArrayValidator {
        contains,
        ..Default::default()
    });
    Ok(apply_required(validator, level, key))
}

/// Translate a `contains` sub-schema into the shallow element-kind rule.
/// Elements are matched by coarse kind only, never against the full
/// sub-schema.
fn contains_rule(node: SchemaNode) -> Result<ContainsRule, BuildError> {
    let Some(name) = node.type_str() else {
        return Err(BuildError::MissingType);
    };
    let Some(kind) = Kind::parse(name) else {
        return Err(BuildError::UnsupportedType(name.to_string()));
    };
    Ok(ContainsRule {
        kind,
        message: format!("At least one item of this array must be of {} type", name),
    })
}
