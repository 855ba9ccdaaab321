//! Compiles a JSON Schema document into an executable validator tree
//!
//! The input is an in-memory document (`serde_json::Value`) using a subset
//! of JSON Schema Draft-07: `type`, `properties`, `required`, `$ref`,
//! `definitions`, `if`/`then`/`else`, `default`, `const`, `enum`,
//! `pattern`, `minLength`/`maxLength`, `minimum`/`maximum`, `contains`.
//! The output is a [`Validator`] from `vouch-runtime`.
//!
//! Compilation is synchronous and pure: the document is never mutated, two
//! conversions never interact, and the only deferred work in the result is
//! the per-value type choice of multi-type fields.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let document = json!({
//!     "type": "object",
//!     "properties": {
//!         "name": { "type": "string", "minLength": 2 }
//!     },
//!     "required": ["name"]
//! });
//!
//! let validator = vouch_compiler::convert(&document).unwrap();
//! assert!(validator.is_valid(&json!({ "name": "ab" })));
//! assert!(!validator.is_valid(&json!({})));
//! ```

pub mod builder;
pub mod conditions;
pub mod definitions;
pub mod dispatch;
pub mod leaf;
pub mod required;

use serde_json::Value;
use tracing::debug;

pub use vouch_core::{BuildError, SchemaNode, TypeName};
pub use vouch_runtime::{ValidationError, ValidationErrors, Validator};

use vouch_runtime::ObjectValidator;

/// Compile a schema document into a validator.
///
/// Fails with a [`BuildError`] on document-shape defects; value-shape
/// failures are reported by the returned validator instead. A document
/// without a `properties` map compiles to a validator accepting any plain
/// object.
pub fn convert(document: &Value) -> Result<Validator, BuildError> {
    let root = SchemaNode::new(document);
    match builder::build(root, root)? {
        Some(object) => Ok(Validator::Object(object)),
        None => {
            debug!("document has no properties; compiled an open object validator");
            Ok(Validator::Object(ObjectValidator::default()))
        }
    }
}
