//! Descriptor model: plugins, their commands and generated source fragments

mod command;
mod plugin;
mod trigger_bundle;

pub use command::{Command, DEFAULT_DESCRIPTION, DEFAULT_USAGE};
pub use plugin::{
    DEFAULT_AUTHOR, DEFAULT_PACKAGE, DEFAULT_PATH, DEFAULT_PLUGIN_DESCRIPTION, DEFAULT_VERSION,
    ENTRY_POINT_CLASS, ENTRY_POINT_IMPORTS, EntryPoint, Plugin, PluginBuilder,
};
pub use trigger_bundle::{COMMAND_IMPORTS, MethodSource, TriggerBundle};
