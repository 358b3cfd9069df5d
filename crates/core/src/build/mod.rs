//! Assembly of a described plugin into a packaged archive

mod archive;
mod context;
mod pipeline;
mod support_library;
mod tool_command;
mod toolchain;

pub use archive::ArchiveBuilder;
pub use context::BuildContext;
pub use pipeline::{AssemblyPipeline, BuildArtifact};
pub use support_library::ensure_support_library;
pub use tool_command::ToolCommand;
pub use toolchain::{SystemToolchain, Toolchain};
