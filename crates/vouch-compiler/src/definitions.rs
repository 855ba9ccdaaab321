//! `$ref` resolution against the root document's definitions table

use tracing::debug;
use vouch_core::SchemaNode;

/// Resolve a `#/definitions/<name>` reference.
///
/// Resolution is exclusive: the looked-up definition replaces the
/// referencing node entirely, so sibling keywords next to `$ref` are
/// discarded rather than merged. The definition is compiled independently
/// at every reference site; cyclic reference chains are unsupported.
///
/// An unresolvable reference returns `None` and the caller proceeds with
/// the referencing node, which surfaces as a missing-type failure at
/// dispatch when no usable type remains.
pub fn resolve<'a>(node: SchemaNode<'a>, root: SchemaNode<'a>) -> Option<SchemaNode<'a>> {
    let reference = node.reference()?;
    let Some(name) = reference.strip_prefix("#/definitions/") else {
        debug!(reference = %reference, "unsupported reference form");
        return None;
    };
    match root.definitions().and_then(|definitions| definitions.get(name)) {
        Some(definition) => Some(SchemaNode::new(definition)),
        None => {
            debug!(name = %name, "definition not found");
            None
        }
    }
}
