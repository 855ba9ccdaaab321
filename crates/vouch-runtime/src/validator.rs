//! The compiled validator tree
//!
//! A [`Validator`] is a tagged union over the supported value shapes,
//! matched exhaustively at a single dispatch point. Object validators own
//! their children outright; there is no sharing between trees and no
//! cycles within one.

use crate::check::Check;
use crate::condition::Condition;
use crate::errors::{ValidationError, ValidationErrors};
use crate::kind::Kind;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// An executable validator for one value shape.
#[derive(Debug, Clone)]
pub enum Validator {
    String(LeafValidator),
    Number(LeafValidator),
    Integer(LeafValidator),
    Boolean(LeafValidator),
    Null(LeafValidator),
    Object(ObjectValidator),
    Array(ArrayValidator),
    Lazy(LazyValidator),
}

/// A typed leaf: constraint checks plus field flags. The accepted native
/// kind comes from the enclosing [`Validator`] variant.
#[derive(Debug, Clone, Default)]
pub struct LeafValidator {
    /// Failure message when the field is required and absent.
    pub required: Option<String>,
    /// Value materialized before the required check when the field is absent.
    pub default: Option<Value>,
    pub checks: Vec<Check>,
    pub condition: Option<Condition>,
}

/// An object validator: either a composed shape of named children, or a
/// propertyless leaf accepting any plain object.
#[derive(Debug, Clone, Default)]
pub struct ObjectValidator {
    pub required: Option<String>,
    /// Named child validators; `None` accepts any plain object.
    pub shape: Option<BTreeMap<String, Validator>>,
    pub condition: Option<Condition>,
}

/// An array validator, optionally carrying a shallow `contains` rule.
#[derive(Debug, Clone, Default)]
pub struct ArrayValidator {
    pub required: Option<String>,
    pub contains: Option<ContainsRule>,
    pub condition: Option<Condition>,
}

/// Shallow element-kind rule: the array passes when empty or when at
/// least one element's coarse kind matches. Elements are never validated
/// against a full sub-schema.
#[derive(Debug, Clone)]
pub struct ContainsRule {
    pub kind: Kind,
    pub message: String,
}

/// Deferred dispatch for multi-type fields: the ordered candidate list is
/// fixed at build time, and the first candidate whose kind predicate
/// accepts the runtime value handles it.
#[derive(Debug, Clone)]
pub struct LazyValidator {
    pub candidates: Vec<(Kind, Validator)>,
}

impl Validator {
    /// Synchronous accept/reject.
    pub fn is_valid(&self, value: &Value) -> bool {
        self.validate(value).is_ok()
    }

    /// Validate and collect every field-level failure.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.check_value(value, None, "", &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and stop at the first failure.
    pub fn validate_strict(&self, value: &Value) -> Result<(), ValidationError> {
        match self.validate(value) {
            Ok(()) => Ok(()),
            Err(errors) => match errors.into_first() {
                Some(first) => Err(first),
                None => Ok(()),
            },
        }
    }

    /// Mark this validator required with the given failure message.
    pub fn with_required(mut self, message: impl Into<String>) -> Self {
        match &mut self {
            Validator::String(leaf)
            | Validator::Number(leaf)
            | Validator::Integer(leaf)
            | Validator::Boolean(leaf)
            | Validator::Null(leaf) => leaf.required = Some(message.into()),
            Validator::Object(object) => object.required = Some(message.into()),
            Validator::Array(array) => array.required = Some(message.into()),
            // Lazy fields resolve required-ness through the delegated
            // candidate validators.
            Validator::Lazy(_) => {}
        }
        self
    }

    /// Attach contingent constraint logic to this validator.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        match &mut self {
            Validator::String(leaf)
            | Validator::Number(leaf)
            | Validator::Integer(leaf)
            | Validator::Boolean(leaf)
            | Validator::Null(leaf) => leaf.condition = Some(condition),
            Validator::Object(object) => object.condition = Some(condition),
            Validator::Array(array) => array.condition = Some(condition),
            Validator::Lazy(_) => {}
        }
        self
    }

    fn required_message(&self) -> Option<&str> {
        match self {
            Validator::String(leaf)
            | Validator::Number(leaf)
            | Validator::Integer(leaf)
            | Validator::Boolean(leaf)
            | Validator::Null(leaf) => leaf.required.as_deref(),
            Validator::Object(object) => object.required.as_deref(),
            Validator::Array(array) => array.required.as_deref(),
            Validator::Lazy(_) => None,
        }
    }

    fn default_value(&self) -> Option<&Value> {
        match self {
            Validator::String(leaf)
            | Validator::Number(leaf)
            | Validator::Integer(leaf)
            | Validator::Boolean(leaf)
            | Validator::Null(leaf) => leaf.default.as_ref(),
            _ => None,
        }
    }

    fn condition(&self) -> Option<&Condition> {
        match self {
            Validator::String(leaf)
            | Validator::Number(leaf)
            | Validator::Integer(leaf)
            | Validator::Boolean(leaf)
            | Validator::Null(leaf) => leaf.condition.as_ref(),
            Validator::Object(object) => object.condition.as_ref(),
            Validator::Array(array) => array.condition.as_ref(),
            Validator::Lazy(_) => None,
        }
    }

    /// Check one field of `parent`, resolving defaults and required-ness.
    ///
    /// Defaults materialize first, so a required field with a compiled
    /// default is satisfied by an empty candidate object.
    fn check_field(
        &self,
        key: &str,
        parent: &Map<String, Value>,
        parent_path: &str,
        errors: &mut ValidationErrors,
    ) {
        let path = join_path(parent_path, key);
        let value = parent.get(key).or_else(|| self.default_value());

        match value {
            Some(value) => self.check_value(value, Some(parent), &path, errors),
            None => {
                let branch = self.condition().and_then(|c| c.active_branch(parent));
                let required = self
                    .required_message()
                    .or_else(|| branch.and_then(|b| b.required.as_deref()));
                if let Some(message) = required {
                    errors.push(ValidationError::new(path, message).with_rule("required"));
                }
            }
        }
    }

    /// Check a present value. `parent` carries the enclosing candidate
    /// object so contingent constraints can read their dependency.
    fn check_value(
        &self,
        value: &Value,
        parent: Option<&Map<String, Value>>,
        path: &str,
        errors: &mut ValidationErrors,
    ) {
        match self {
            Validator::String(leaf) => leaf.check_typed(Kind::String, value, parent, path, errors),
            Validator::Number(leaf) => leaf.check_typed(Kind::Number, value, parent, path, errors),
            Validator::Integer(leaf) => {
                leaf.check_typed(Kind::Integer, value, parent, path, errors)
            }
            Validator::Boolean(leaf) => {
                leaf.check_typed(Kind::Boolean, value, parent, path, errors)
            }
            Validator::Null(leaf) => leaf.check_typed(Kind::Null, value, parent, path, errors),
            Validator::Object(object) => object.check_value(value, parent, path, errors),
            Validator::Array(array) => array.check_value(value, parent, path, errors),
            Validator::Lazy(lazy) => lazy.check_value(value, parent, path, errors),
        }
    }
}

impl LeafValidator {
    fn check_typed(
        &self,
        kind: Kind,
        value: &Value,
        parent: Option<&Map<String, Value>>,
        path: &str,
        errors: &mut ValidationErrors,
    ) {
        if !kind.matches(value) {
            errors.push(type_error(path, kind));
            return;
        }
        run_checks(&self.checks, value, path, errors);
        run_condition(self.condition.as_ref(), value, parent, path, errors);
    }
}

impl ObjectValidator {
    fn check_value(
        &self,
        value: &Value,
        parent: Option<&Map<String, Value>>,
        path: &str,
        errors: &mut ValidationErrors,
    ) {
        let Some(map) = value.as_object() else {
            errors.push(type_error(path, Kind::Object));
            return;
        };
        if let Some(shape) = &self.shape {
            for (key, child) in shape {
                child.check_field(key, map, path, errors);
            }
        }
        run_condition(self.condition.as_ref(), value, parent, path, errors);
    }
}

impl ArrayValidator {
    fn check_value(
        &self,
        value: &Value,
        parent: Option<&Map<String, Value>>,
        path: &str,
        errors: &mut ValidationErrors,
    ) {
        let Some(items) = value.as_array() else {
            errors.push(type_error(path, Kind::Array));
            return;
        };
        if let Some(rule) = &self.contains {
            // Empty arrays pass vacuously.
            if !items.is_empty() && !items.iter().any(|item| rule.kind.matches(item)) {
                errors.push(
                    ValidationError::new(path, rule.message.as_str()).with_rule("contains"),
                );
            }
        }
        run_condition(self.condition.as_ref(), value, parent, path, errors);
    }
}

impl LazyValidator {
    fn check_value(
        &self,
        value: &Value,
        parent: Option<&Map<String, Value>>,
        path: &str,
        errors: &mut ValidationErrors,
    ) {
        match self
            .candidates
            .iter()
            .find(|(kind, _)| kind.matches(value))
        {
            Some((_, validator)) => validator.check_value(value, parent, path, errors),
            None => errors.push(
                ValidationError::new(
                    path,
                    format!("{} data type is not supported", Kind::of(value)),
                )
                .with_rule("type"),
            ),
        }
    }
}

fn run_checks(checks: &[Check], value: &Value, path: &str, errors: &mut ValidationErrors) {
    for check in checks {
        if !check.passes(value) {
            errors.push(ValidationError::new(path, check.message.as_str()).with_rule(check.rule()));
        }
    }
}

fn run_condition(
    condition: Option<&Condition>,
    value: &Value,
    parent: Option<&Map<String, Value>>,
    path: &str,
    errors: &mut ValidationErrors,
) {
    let (Some(condition), Some(parent)) = (condition, parent) else {
        return;
    };
    if let Some(branch) = condition.active_branch(parent) {
        run_checks(&branch.checks, value, path, errors);
    }
}

fn type_error(path: &str, kind: Kind) -> ValidationError {
    ValidationError::new(path, format!("Value must be of {} type", kind)).with_rule("type")
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}
