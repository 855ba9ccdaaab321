use thiserror::Error;

/// Document-shape errors raised while compiling a schema.
///
/// These abort the conversion entirely; value-shape failures are reported
/// as structured validation errors by the runtime instead.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Type key is missing")]
    MissingType,

    #[error("{0} is not supported")]
    UnsupportedType(String),

    #[error("Unable to find the schema property related to the if schema")]
    UnresolvedIfProperty,

    #[error("Incorrect pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}
