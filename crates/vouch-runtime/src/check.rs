//! Constraint predicates with caller-supplied failure messages

use regex::Regex;
use serde_json::Value;

/// A single constraint predicate paired with the message reported when it
/// fails. The message is supplied by whoever compiles the validator; the
/// runtime never invents constraint wording.
#[derive(Debug, Clone)]
pub struct Check {
    pub kind: CheckKind,
    pub message: String,
}

impl Check {
    pub fn new(kind: CheckKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn passes(&self, value: &Value) -> bool {
        self.kind.passes(value)
    }

    pub fn rule(&self) -> &'static str {
        self.kind.rule()
    }
}

/// The supported constraint predicates.
///
/// String-shaped predicates fail on non-string values and numeric bounds
/// fail on non-numeric values, so a check attached to the wrong kind of
/// value rejects rather than panics. Patterns are full-string matches;
/// anchoring is the pattern compiler's responsibility.
#[derive(Debug, Clone)]
pub enum CheckKind {
    MinLength(u64),
    MaxLength(u64),
    Pattern(Regex),
    Const(Value),
    Enum(Vec<Value>),
    Minimum(f64),
    Maximum(f64),
}

impl CheckKind {
    pub fn passes(&self, value: &Value) -> bool {
        match self {
            CheckKind::MinLength(min) => {
                value.as_str().is_some_and(|s| char_count(s) >= *min)
            }
            CheckKind::MaxLength(max) => {
                value.as_str().is_some_and(|s| char_count(s) <= *max)
            }
            CheckKind::Pattern(re) => value.as_str().is_some_and(|s| re.is_match(s)),
            CheckKind::Const(expected) => value == expected,
            CheckKind::Enum(allowed) => allowed.iter().any(|v| v == value),
            CheckKind::Minimum(min) => value.as_f64().is_some_and(|f| f >= *min),
            CheckKind::Maximum(max) => value.as_f64().is_some_and(|f| f <= *max),
        }
    }

    /// The schema keyword this predicate implements, for error reporting.
    pub fn rule(&self) -> &'static str {
        match self {
            CheckKind::MinLength(_) => "minLength",
            CheckKind::MaxLength(_) => "maxLength",
            CheckKind::Pattern(_) => "pattern",
            CheckKind::Const(_) => "const",
            CheckKind::Enum(_) => "enum",
            CheckKind::Minimum(_) => "minimum",
            CheckKind::Maximum(_) => "maximum",
        }
    }
}

fn char_count(s: &str) -> u64 {
    s.chars().count() as u64
}
