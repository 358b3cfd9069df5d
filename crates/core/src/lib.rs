//! plugsmith - Generate server plugins from callback-style command handlers
//!
//! This crate provides functionality to:
//! - Describe a plugin and its commands
//! - Transpile scripting-style callbacks into Java `onCommand` handlers
//! - Guard handlers behind sender capability checks
//! - Compile and package the generated project into a `.jar`
pub mod build;
pub mod codegen;
pub mod config;
pub mod error;
pub mod guard;
pub mod manifest;
pub mod transpiler;
pub mod trigger;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use build::{AssemblyPipeline, BuildArtifact, BuildContext, SystemToolchain, Toolchain};
pub use config::Config;
pub use guard::{Capability, CapabilityRegistry};
pub use transpiler::{TranspiledHandler, transpile};
pub use trigger::{CancelHandle, DeferredBuild, ReadySignal, deferred};
