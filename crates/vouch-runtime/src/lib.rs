//! Runtime validator tree for vouch-compiled schemas
//!
//! This crate supplies the composable validation primitives the compiler
//! targets:
//!
//! - **Validator tree**: a tagged union over the supported value shapes,
//!   with object-shape composition over named children
//! - **Constraint predicates**: checks carrying caller-supplied failure
//!   messages
//! - **Required/default handling**: defaults materialize before required
//!   checks are evaluated
//! - **Contingent constraints**: branch logic gated on a sibling
//!   property's value
//! - **Lazy dispatch**: multi-type fields resolved per runtime value
//!
//! Validation is synchronous and side-effect free. `is_valid` answers
//! accept/reject, `validate` collects every field-level failure, and
//! `validate_strict` stops at the first.

mod check;
mod condition;
mod errors;
mod kind;
mod validator;

pub use check::{Check, CheckKind};
pub use condition::{Branch, Condition};
pub use errors::{ValidationError, ValidationErrors};
pub use kind::Kind;
pub use validator::{
    ArrayValidator, ContainsRule, LazyValidator, LeafValidator, ObjectValidator, Validator,
};
