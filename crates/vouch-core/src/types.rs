//! The primitive type vocabulary of the supported schema subset

use std::fmt;

/// The seven primitive type names a schema `type` keyword may carry.
///
/// Parsing a type string into this enum is the single place where an
/// unknown name is rejected; everything downstream matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Null,
    Array,
}

impl TypeName {
    /// Parse a schema type string. Returns `None` for anything outside the
    /// supported set.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "string" => Some(TypeName::String),
            "number" => Some(TypeName::Number),
            "integer" => Some(TypeName::Integer),
            "boolean" => Some(TypeName::Boolean),
            "object" => Some(TypeName::Object),
            "null" => Some(TypeName::Null),
            "array" => Some(TypeName::Array),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeName::String => "string",
            TypeName::Number => "number",
            TypeName::Integer => "integer",
            TypeName::Boolean => "boolean",
            TypeName::Object => "object",
            TypeName::Null => "null",
            TypeName::Array => "array",
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
