mod java;

pub use java::{render_command_source, render_entry_point};
