//! Number validator construction

use vouch_core::{BuildError, SchemaNode};
use vouch_runtime::{Check, CheckKind, LeafValidator, Validator};

use crate::required::apply_required;

pub fn compile(key: &str, node: SchemaNode, level: SchemaNode) -> Result<Validator, BuildError> {
    Ok(apply_required(Validator::Number(base(node)), level, key))
}

/// Shared numeric translation; the integer constructor composes this
/// rather than duplicating it.
pub(crate) fn base(node: SchemaNode) -> LeafValidator {
    LeafValidator {
        default: node.default_value().filter(|v| v.is_number()).cloned(),
        checks: checks(node),
        ..Default::default()
    }
}

fn checks(node: SchemaNode) -> Vec<Check> {
    let mut checks = Vec::new();

    if let Some(min) = node.minimum() {
        checks.push(Check::new(
            CheckKind::Minimum(min),
            format!("A minimum value of {} required", min),
        ));
    }
    if let Some(max) = node.maximum() {
        checks.push(Check::new(
            CheckKind::Maximum(max),
            format!("A maximum value of {} required", max),
        ));
    }

    checks
}
