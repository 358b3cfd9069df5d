pub mod formatter;

pub use formatter::{format_method, print_artifact};
