pub mod cli;
pub mod commands;
pub mod descriptor;
pub mod display;

// Re-export commonly used items
pub use cli::{Cli, Commands};
pub use descriptor::{CommandDescriptor, PluginDescriptor};
