//! Configuration for plugsmith builds

mod sections;
mod settings;

pub use sections::{
    ArchiveCompression, ArchiveConfig, CompilerConfig, DEFAULT_LIBRARY_DIRECTORY, GitConfig,
    SupportLibraryConfig,
};
pub use settings::{CONFIG_FILE_NAMES, Config};
