//! Borrowed views over JSON Schema document fragments
//!
//! A [`SchemaNode`] is an immutable window onto one fragment of the input
//! document. The compiler never mutates the document it was handed; every
//! merge or resolution produces a new derived node instead.

use serde_json::{Map, Value};

/// An immutable fragment of a schema document with keyword accessors.
///
/// The node is a thin `Copy` wrapper over a borrowed `serde_json::Value`,
/// so handing nodes around during compilation is free.
#[derive(Debug, Clone, Copy)]
pub struct SchemaNode<'a> {
    value: &'a Value,
}

impl<'a> SchemaNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// View a value as a schema node only when it is object-shaped.
    ///
    /// Property entries that are not objects are not schema fragments and
    /// get skipped by the builder.
    pub fn object(value: &'a Value) -> Option<Self> {
        value.is_object().then(|| Self::new(value))
    }

    pub fn as_value(&self) -> &'a Value {
        self.value
    }

    pub fn is_object(&self) -> bool {
        self.value.is_object()
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.value.get(key)
    }

    /// The raw `type` keyword value, string or array of strings.
    pub fn ty(&self) -> Option<&'a Value> {
        self.get("type")
    }

    /// The `type` keyword when it names a single type.
    pub fn type_str(&self) -> Option<&'a str> {
        self.ty().and_then(|v| v.as_str())
    }

    pub fn properties(&self) -> Option<&'a Map<String, Value>> {
        self.get("properties").and_then(|v| v.as_object())
    }

    /// Whether `key` appears in this level's `required` array.
    pub fn requires(&self, key: &str) -> bool {
        self.required_keys()
            .map(|mut keys| keys.any(|k| k == key))
            .unwrap_or(false)
    }

    /// The level's `required` array entries, when present.
    pub fn required_keys(&self) -> Option<impl Iterator<Item = &'a str>> {
        let entries = self.get("required")?.as_array()?;
        Some(entries.iter().filter_map(|v| v.as_str()))
    }

    /// The `$ref` keyword.
    pub fn reference(&self) -> Option<&'a str> {
        self.get("$ref").and_then(|v| v.as_str())
    }

    pub fn definitions(&self) -> Option<&'a Map<String, Value>> {
        self.get("definitions").and_then(|v| v.as_object())
    }

    pub fn if_node(&self) -> Option<SchemaNode<'a>> {
        self.get("if").and_then(SchemaNode::object)
    }

    pub fn then_node(&self) -> Option<SchemaNode<'a>> {
        self.get("then").and_then(SchemaNode::object)
    }

    pub fn else_node(&self) -> Option<SchemaNode<'a>> {
        self.get("else").and_then(SchemaNode::object)
    }

    pub fn default_value(&self) -> Option<&'a Value> {
        self.get("default")
    }

    pub fn const_value(&self) -> Option<&'a Value> {
        self.get("const")
    }

    pub fn enum_values(&self) -> Option<&'a Vec<Value>> {
        self.get("enum").and_then(|v| v.as_array())
    }

    pub fn pattern(&self) -> Option<&'a str> {
        self.get("pattern").and_then(|v| v.as_str())
    }

    pub fn min_length(&self) -> Option<u64> {
        self.get("minLength").and_then(|v| v.as_u64())
    }

    pub fn max_length(&self) -> Option<u64> {
        self.get("maxLength").and_then(|v| v.as_u64())
    }

    pub fn minimum(&self) -> Option<f64> {
        self.get("minimum").and_then(|v| v.as_f64())
    }

    pub fn maximum(&self) -> Option<f64> {
        self.get("maximum").and_then(|v| v.as_f64())
    }

    pub fn contains(&self) -> Option<SchemaNode<'a>> {
        self.get("contains").and_then(SchemaNode::object)
    }

    pub fn items(&self) -> Option<SchemaNode<'a>> {
        self.get("items").and_then(SchemaNode::object)
    }
}
