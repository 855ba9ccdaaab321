//! Schema document model and build-time errors for the vouch compiler

pub mod document;
pub mod error;
pub mod types;

pub use document::SchemaNode;
pub use error::BuildError;
pub use types::TypeName;
