//! Native-kind predicates over runtime JSON values

use serde_json::Value;
use std::fmt;

/// The coarse runtime kind of a JSON value.
///
/// Kinds drive two things: candidate selection for lazy multi-type fields
/// (first declared kind whose predicate accepts the value wins) and the
/// shallow element matching of the array `contains` rule. `Integer` is the
/// one kind with no JSON representation of its own: it accepts any numeric
/// value that is a whole number, so `50.0` counts as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Null,
    Array,
}

impl Kind {
    /// Parse a schema type name into a kind predicate.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Kind::String),
            "number" => Some(Kind::Number),
            "integer" => Some(Kind::Integer),
            "boolean" => Some(Kind::Boolean),
            "object" => Some(Kind::Object),
            "null" => Some(Kind::Null),
            "array" => Some(Kind::Array),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Integer => "integer",
            Kind::Boolean => "boolean",
            Kind::Object => "object",
            Kind::Null => "null",
            Kind::Array => "array",
        }
    }

    /// Whether `value`'s native kind satisfies this predicate.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Kind::String => value.is_string(),
            Kind::Number => value.is_number(),
            Kind::Integer => is_integral(value),
            Kind::Boolean => value.is_boolean(),
            Kind::Object => value.is_object(),
            Kind::Null => value.is_null(),
            Kind::Array => value.is_array(),
        }
    }

    /// The kind a value reports as. Numbers always report `Number`;
    /// `Integer` exists only as a predicate.
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::String(_) => Kind::String,
            Value::Number(_) => Kind::Number,
            Value::Bool(_) => Kind::Boolean,
            Value::Object(_) => Kind::Object,
            Value::Null => Kind::Null,
            Value::Array(_) => Kind::Array,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole-number numeric test. Rejects numeric strings outright.
pub(crate) fn is_integral(value: &Value) -> bool {
    match value.as_f64() {
        Some(f) => f.fract() == 0.0,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_accepts_whole_floats() {
        assert!(Kind::Integer.matches(&json!(2)));
        assert!(Kind::Integer.matches(&json!(50.0)));
        assert!(!Kind::Integer.matches(&json!(2.36)));
        assert!(!Kind::Integer.matches(&json!("6")));
        assert!(!Kind::Integer.matches(&json!(null)));
    }

    #[test]
    fn test_predicates_match_their_own_kind() {
        let samples = [
            (Kind::String, json!("a")),
            (Kind::Number, json!(1.5)),
            (Kind::Boolean, json!(true)),
            (Kind::Object, json!({})),
            (Kind::Null, json!(null)),
            (Kind::Array, json!([])),
        ];

        for (kind, value) in &samples {
            assert!(kind.matches(value), "{} should accept {}", kind, value);
            assert_eq!(Kind::of(value), *kind);
        }
    }

    #[test]
    fn test_numbers_report_number_kind() {
        assert_eq!(Kind::of(&json!(7)), Kind::Number);
        assert_eq!(Kind::of(&json!(7.5)), Kind::Number);
    }

    #[test]
    fn test_parse_round_trips() {
        for name in ["string", "number", "integer", "boolean", "object", "null", "array"] {
            assert_eq!(Kind::parse(name).map(|k| k.as_str()), Some(name));
        }
        assert!(Kind::parse("date").is_none());
    }
}
