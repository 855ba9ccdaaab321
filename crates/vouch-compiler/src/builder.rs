//! The recursive schema walker composing object validators

use std::collections::BTreeMap;
use tracing::{debug, instrument, trace};
use vouch_core::{BuildError, SchemaNode};
use vouch_runtime::{ObjectValidator, Validator};

use crate::{conditions, definitions, dispatch};

/// Build an object validator from an object-typed node carrying a
/// `properties` map.
///
/// Returns `None` for any other node; callers treat that as "no sub-schema
/// here". The level is normalized through the condition merger first, then
/// each property entry is resolved and compiled: non-object entries are
/// dropped silently, `$ref` entries are replaced by their definitions,
/// object entries with nested `properties` recurse, and everything else
/// goes through type dispatch.
#[instrument(skip_all, level = "trace")]
pub fn build(node: SchemaNode, root: SchemaNode) -> Result<Option<ObjectValidator>, BuildError> {
    let level = conditions::normalize(node)?;

    if node.type_str() != Some("object") {
        return Ok(None);
    }
    let Some(properties) = &level.properties else {
        return Ok(None);
    };

    let mut shape = BTreeMap::new();

    for (key, value) in properties {
        let Some(entry) = SchemaNode::object(value) else {
            trace!(key = %key, "skipping non-object property entry");
            continue;
        };

        let entry = match definitions::resolve(entry, root) {
            Some(resolved) => resolved,
            None => entry,
        };

        if entry.type_str() == Some("object") && entry.properties().is_some() {
            if level.plan_for(key).is_some() {
                debug!(key = %key, "conditional constraints on nested object properties are not supported");
            }
            if let Some(nested) = build(entry, root)? {
                shape.insert(key.clone(), Validator::Object(nested));
            }
            continue;
        }

        let mut validator = dispatch::compile(key, entry, node)?;
        if let Some(plan) = level.plan_for(key) {
            validator = validator.with_condition(conditions::compile_plan(plan)?);
        }
        shape.insert(key.clone(), validator);
    }

    Ok(Some(ObjectValidator {
        shape: Some(shape),
        ..Default::default()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_object_nodes_produce_no_sub_schema() {
        let doc = json!({ "type": "string" });
        let root = SchemaNode::new(&doc);
        assert!(build(root, root).unwrap().is_none());
    }

    #[test]
    fn test_missing_properties_produce_no_sub_schema() {
        let doc = json!({ "type": "object" });
        let root = SchemaNode::new(&doc);
        assert!(build(root, root).unwrap().is_none());
    }

    #[test]
    fn test_malformed_entries_are_dropped() {
        let doc = json!({
            "type": "object",
            "properties": {
                "bad": 5,
                "name": { "type": "string" }
            }
        });
        let root = SchemaNode::new(&doc);

        let object = build(root, root).unwrap().unwrap();
        let shape = object.shape.unwrap();
        assert!(shape.contains_key("name"));
        assert!(!shape.contains_key("bad"));
    }

    #[test]
    fn test_nested_object_entries_recurse() {
        let doc = json!({
            "type": "object",
            "properties": {
                "address": {
                    "type": "object",
                    "properties": {
                        "state": { "type": "string" }
                    }
                }
            }
        });
        let root = SchemaNode::new(&doc);

        let object = build(root, root).unwrap().unwrap();
        let shape = object.shape.unwrap();
        match shape.get("address") {
            Some(Validator::Object(nested)) => {
                assert!(nested.shape.as_ref().unwrap().contains_key("state"));
            }
            other => panic!("expected nested object validator, got {:?}", other),
        }
    }
}
