//! Small helpers shared across the crate

pub mod fs;
pub mod identifier;
pub mod serde_helpers;

pub use identifier::{is_java_identifier, validate_identifier, validate_qualified_name};
