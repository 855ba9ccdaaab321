//! Type dispatch from the `type` keyword to validator constructors

use serde_json::Value;
use tracing::debug;
use vouch_core::{BuildError, SchemaNode, TypeName};
use vouch_runtime::{Kind, LazyValidator, Validator};

use crate::leaf;

/// Compile a property entry according to its `type` keyword.
///
/// A single known type goes straight to the matching constructor. An array
/// of types compiles to a lazy validator that defers the choice to
/// validation time, testing the value against each declared type in the
/// order listed. Anything else is a build failure.
pub fn compile(key: &str, node: SchemaNode, level: SchemaNode) -> Result<Validator, BuildError> {
    match node.ty() {
        Some(Value::String(name)) => compile_single(name, key, node, level),
        Some(Value::Array(names)) => compile_lazy(names, key, node, level),
        _ => Err(BuildError::MissingType),
    }
}

fn compile_single(
    name: &str,
    key: &str,
    node: SchemaNode,
    level: SchemaNode,
) -> Result<Validator, BuildError> {
    let Some(type_name) = TypeName::parse(name) else {
        return Err(BuildError::UnsupportedType(name.to_string()));
    };
    match type_name {
        TypeName::String => leaf::string::compile(key, node, level),
        TypeName::Number => leaf::number::compile(key, node, level),
        TypeName::Integer => leaf::integer::compile(key, node, level),
        TypeName::Boolean => leaf::boolean::compile(key, node, level),
        TypeName::Null => leaf::null::compile(key, node, level),
        TypeName::Object => leaf::object::compile(key, node, level),
        TypeName::Array => leaf::array::compile(key, node, level),
    }
}

/// Pre-compile one candidate per declared type; only the value-dependent
/// choice between them stays deferred.
fn compile_lazy(
    names: &[Value],
    key: &str,
    node: SchemaNode,
    level: SchemaNode,
) -> Result<Validator, BuildError> {
    let mut candidates = Vec::new();
    for name in names.iter().filter_map(|n| n.as_str()) {
        let Some(type_name) = TypeName::parse(name) else {
            debug!(key = %key, candidate = %name, "skipping unsupported candidate type");
            continue;
        };
        let validator = compile_single(name, key, node, level)?;
        candidates.push((kind_of(type_name), validator));
    }
    Ok(Validator::Lazy(LazyValidator { candidates }))
}

/// Map a schema type name onto its runtime kind predicate.
fn kind_of(type_name: TypeName) -> Kind {
    match type_name {
        TypeName::String => Kind::String,
        TypeName::Number => Kind::Number,
        TypeName::Integer => Kind::Integer,
        TypeName::Boolean => Kind::Boolean,
        TypeName::Object => Kind::Object,
        TypeName::Null => Kind::Null,
        TypeName::Array => Kind::Array,
    }
}
