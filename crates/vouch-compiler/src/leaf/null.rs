//! Null validator construction

use vouch_core::{BuildError, SchemaNode};
use vouch_runtime::{LeafValidator, Validator};

use crate::required::apply_required;

/// Accepts only `null`; no keywords beyond the required flag.
pub fn compile(key: &str, _node: SchemaNode, level: SchemaNode) -> Result<Validator, BuildError> {
    Ok(apply_required(
        Validator::Null(LeafValidator::default()),
        level,
        key,
    ))
}
