//! Contingent constraints gated on a sibling property's value

use crate::check::{Check, CheckKind};
use serde_json::{Map, Value};

/// Constraint logic whose applicability depends on another property of the
/// same candidate object.
///
/// The predicates test the dependency property's current value; when they
/// all hold the `then` branch is active, otherwise the `else` branch (when
/// one exists). An absent dependency is tested as `null`, which fails
/// every value-shaped predicate and so selects the `else` side.
#[derive(Debug, Clone)]
pub struct Condition {
    /// The property whose value the predicates test.
    pub key: String,
    /// AND-combined predicates over the dependency value.
    pub predicates: Vec<CheckKind>,
    pub then_branch: Option<Branch>,
    pub else_branch: Option<Branch>,
}

/// One side of a condition: extra checks for the target field, plus an
/// optional required marking that binds only while the branch is active.
#[derive(Debug, Clone, Default)]
pub struct Branch {
    pub checks: Vec<Check>,
    /// Required-failure message, when the branch makes the field mandatory.
    pub required: Option<String>,
}

impl Condition {
    /// Resolve which branch applies for the given candidate object.
    pub fn active_branch(&self, parent: &Map<String, Value>) -> Option<&Branch> {
        let dependency = parent.get(&self.key).unwrap_or(&Value::Null);
        if self.predicates.iter().all(|p| p.passes(dependency)) {
            self.then_branch.as_ref()
        } else {
            self.else_branch.as_ref()
        }
    }
}
