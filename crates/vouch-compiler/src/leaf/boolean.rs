//! Boolean validator construction

use vouch_core::{BuildError, SchemaNode};
use vouch_runtime::{LeafValidator, Validator};

use crate::required::apply_required;

pub fn compile(key: &str, node: SchemaNode, level: SchemaNode) -> Result<Validator, BuildError> {
    let leaf = LeafValidator {
        // The default is honored only when its value is actually boolean.
        default: node.default_value().filter(|v| v.is_boolean()).cloned(),
        ..Default::default()
    };
    Ok(apply_required(Validator::Boolean(leaf), level, key))
}
