//! `if`/`then`/`else` normalization and contingent-constraint compilation
//!
//! Condition handling runs in two phases. Phase one ([`normalize`]) is a
//! pure rewrite of one schema level: branch properties missing from the
//! level's own `properties` are added as type-only placeholders, and every
//! contingent target gets an explicit [`ConditionalPlan`]. Phase two
//! ([`compile_plan`]) turns a plan into the runtime condition; it never
//! re-reads the raw conditional keywords.
//!
//! Normalization applies once per schema level. Conditionals nested inside
//! `then`/`else` branches are unsupported, as are predicates spanning more
//! than one `if` property.

use serde_json::{json, Map, Value};
use tracing::debug;
use vouch_core::{BuildError, SchemaNode};
use vouch_runtime::{Branch, CheckKind, Condition};

use crate::leaf;
use crate::required::REQUIRED_MESSAGE;

/// A schema level after condition merging: the augmented property set plus
/// one plan per contingent target key.
#[derive(Debug, Default)]
pub struct NormalizedLevel {
    /// Augmented property map; `None` when the level has no `properties`
    /// and no conditions add any.
    pub properties: Option<Map<String, Value>>,
    plans: Vec<ConditionalPlan>,
}

impl NormalizedLevel {
    /// The conditional plan targeting `key`, when one exists.
    pub fn plan_for(&self, key: &str) -> Option<&ConditionalPlan> {
        self.plans.iter().find(|plan| plan.target == key)
    }
}

/// One contingent target: the dependency and predicate node taken from the
/// `if` schema, plus the target's branch nodes and branch-required flags.
#[derive(Debug)]
pub struct ConditionalPlan {
    pub dependency: String,
    /// The `if.properties.<dependency>` node the predicates come from.
    pub predicates: Value,
    pub target: String,
    pub then_branch: Option<Value>,
    pub then_required: bool,
    pub else_branch: Option<Value>,
    pub else_required: bool,
}

/// Phase one: merge the level's conditional keywords into an explicit
/// property list and plan.
///
/// Every `if.properties` key must already be declared in the level's own
/// `properties`; a miss fails the build regardless of `then`/`else`
/// presence. Branch-only keys are added as placeholders whose type comes
/// from the branch's own declaration — a branch without a type surfaces
/// later, at dispatch, not here.
pub fn normalize(node: SchemaNode) -> Result<NormalizedLevel, BuildError> {
    let mut properties: Option<Map<String, Value>> = node.properties().cloned();

    let Some(if_node) = node.if_node() else {
        // then/else without an if have nothing to gate on
        return Ok(NormalizedLevel {
            properties,
            plans: Vec::new(),
        });
    };
    let Some(if_properties) = if_node.properties() else {
        debug!("if schema has no properties; conditions ignored");
        return Ok(NormalizedLevel {
            properties,
            plans: Vec::new(),
        });
    };

    for key in if_properties.keys() {
        let declared = properties
            .as_ref()
            .map(|map| map.contains_key(key))
            .unwrap_or(false);
        if !declared {
            return Err(BuildError::UnresolvedIfProperty);
        }
    }

    let Some((dependency, predicates)) = if_properties.iter().next() else {
        return Ok(NormalizedLevel {
            properties,
            plans: Vec::new(),
        });
    };
    if if_properties.len() > 1 {
        debug!(
            dependency = %dependency,
            "multiple if properties; only the first is used"
        );
    }

    let mut plans = Vec::new();
    merge_branch(&mut plans, dependency, predicates, node.then_node(), true);
    merge_branch(&mut plans, dependency, predicates, node.else_node(), false);

    for plan in &plans {
        let map = properties.get_or_insert_with(Map::new);
        // Never overwrite a declared property; placeholders are for
        // branch-only keys.
        if !map.contains_key(&plan.target) {
            map.insert(plan.target.clone(), placeholder(plan));
        }
    }

    Ok(NormalizedLevel { properties, plans })
}

/// Phase two: compile a plan into the runtime condition attached to the
/// target's validator.
pub fn compile_plan(plan: &ConditionalPlan) -> Result<Condition, BuildError> {
    let then_branch = plan
        .then_branch
        .as_ref()
        .map(|node| compile_branch(node, plan.then_required))
        .transpose()?;
    let else_branch = plan
        .else_branch
        .as_ref()
        .map(|node| compile_branch(node, plan.else_required))
        .transpose()?;

    Ok(Condition {
        key: plan.dependency.clone(),
        predicates: predicate_checks(SchemaNode::new(&plan.predicates))?,
        then_branch,
        else_branch,
    })
}

fn merge_branch(
    plans: &mut Vec<ConditionalPlan>,
    dependency: &str,
    predicates: &Value,
    branch: Option<SchemaNode>,
    is_then: bool,
) {
    let Some(branch) = branch else { return };
    let Some(branch_properties) = branch.properties() else {
        return;
    };

    for (key, value) in branch_properties {
        let required = branch.requires(key);
        let index = match plans.iter().position(|plan| plan.target == *key) {
            Some(index) => index,
            None => {
                plans.push(ConditionalPlan {
                    dependency: dependency.to_string(),
                    predicates: predicates.clone(),
                    target: key.clone(),
                    then_branch: None,
                    then_required: false,
                    else_branch: None,
                    else_required: false,
                });
                plans.len() - 1
            }
        };
        let plan = &mut plans[index];
        if is_then {
            plan.then_branch = Some(value.clone());
            plan.then_required = required;
        } else {
            plan.else_branch = Some(value.clone());
            plan.else_required = required;
        }
    }
}

/// Type-only placeholder for a branch-only key, typed by the branch's own
/// declaration.
fn placeholder(plan: &ConditionalPlan) -> Value {
    let declared = [&plan.then_branch, &plan.else_branch]
        .into_iter()
        .filter_map(|branch| branch.as_ref())
        .find_map(|branch| branch.get("type"));
    match declared {
        Some(ty) => json!({ "type": ty }),
        None => json!({}),
    }
}

fn compile_branch(node: &Value, required: bool) -> Result<Branch, BuildError> {
    Ok(Branch {
        checks: leaf::string::checks(SchemaNode::new(node))?,
        required: required.then(|| REQUIRED_MESSAGE.to_string()),
    })
}

/// Predicates share the branch constraint keyword set, without messages.
fn predicate_checks(node: SchemaNode) -> Result<Vec<CheckKind>, BuildError> {
    Ok(leaf::string::checks(node)?
        .into_iter()
        .map(|check| check.kind)
        .collect())
}
