//! Integer validator construction
//!
//! Composes the number translation. The strict integral test lives in the
//! Integer variant's kind check, which rejects numeric strings and
//! non-integral numbers outright.

use vouch_core::{BuildError, SchemaNode};
use vouch_runtime::Validator;

use crate::leaf::number;
use crate::required::apply_required;

pub fn compile(key: &str, node: SchemaNode, level: SchemaNode) -> Result<Validator, BuildError> {
    Ok(apply_required(
        Validator::Integer(number::base(node)),
        level,
        key,
    ))
}
