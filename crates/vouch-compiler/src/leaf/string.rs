//! String validator construction

use regex::Regex;
use vouch_core::{BuildError, SchemaNode};
use vouch_runtime::{Check, CheckKind, LeafValidator, Validator};

use crate::required::apply_required;

pub fn compile(key: &str, node: SchemaNode, level: SchemaNode) -> Result<Validator, BuildError> {
    let leaf = LeafValidator {
        default: node.default_value().filter(|v| v.is_string()).cloned(),
        checks: checks(node)?,
        ..Default::default()
    };
    Ok(apply_required(Validator::String(leaf), level, key))
}

/// Translate the string constraint keywords of `node` into checks.
///
/// The condition merger reuses this for `if` predicates and `then`/`else`
/// branch constraints, which honor exactly this keyword set.
pub(crate) fn checks(node: SchemaNode) -> Result<Vec<Check>, BuildError> {
    let mut checks = Vec::new();

    if let Some(min) = node.min_length() {
        checks.push(Check::new(
            CheckKind::MinLength(min),
            format!("A minimum of {} characters required", min),
        ));
    }
    if let Some(max) = node.max_length() {
        checks.push(Check::new(
            CheckKind::MaxLength(max),
            format!("A maximum of {} characters required", max),
        ));
    }
    if let Some(pattern) = node.pattern() {
        checks.push(Check::new(
            CheckKind::Pattern(full_match(pattern)?),
            "Incorrect format",
        ));
    }
    if let Some(constant) = node.const_value() {
        checks.push(Check::new(
            CheckKind::Const(constant.clone()),
            "Value does not match constant",
        ));
    }
    if let Some(allowed) = node.enum_values() {
        checks.push(Check::new(
            CheckKind::Enum(allowed.clone()),
            "Value does not match enum",
        ));
    }

    Ok(checks)
}

/// Compile a schema pattern as a full-string match.
fn full_match(pattern: &str) -> Result<Regex, BuildError> {
    Regex::new(&format!("^(?:{})$", pattern)).map_err(|source| BuildError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_keywords_translate_with_exact_messages() {
        let doc = json!({
            "type": "string",
            "minLength": 6,
            "maxLength": 10,
            "pattern": "[a-z]+",
            "const": "abcdef",
            "enum": ["abcdef", "ghijkl"]
        });

        let checks = checks(SchemaNode::new(&doc)).unwrap();
        let messages: Vec<&str> = checks.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "A minimum of 6 characters required",
                "A maximum of 10 characters required",
                "Incorrect format",
                "Value does not match constant",
                "Value does not match enum",
            ]
        );
    }

    #[test]
    fn test_pattern_is_full_match() {
        let doc = json!({ "pattern": "Aus" });
        let checks = checks(SchemaNode::new(&doc)).unwrap();

        assert!(checks[0].passes(&json!("Aus")));
        assert!(!checks[0].passes(&json!("Australia")));
    }

    #[test]
    fn test_invalid_pattern_is_a_build_failure() {
        let doc = json!({ "pattern": "[unclosed" });
        assert!(matches!(
            checks(SchemaNode::new(&doc)),
            Err(BuildError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_non_string_default_is_ignored() {
        let root = json!({ "type": "object", "properties": {} });
        let doc = json!({ "type": "string", "default": 5 });

        let validator = compile("name", SchemaNode::new(&doc), SchemaNode::new(&root)).unwrap();
        let Validator::String(leaf) = validator else {
            panic!("variant changed");
        };
        assert!(leaf.default.is_none());
    }
}
