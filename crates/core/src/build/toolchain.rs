use super::context::BuildContext;
use super::tool_command::ToolCommand;
use crate::config::{CompilerConfig, Config, GitConfig, SupportLibraryConfig};
use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// External programs the assembly pipeline depends on
pub trait Toolchain {
    /// Fetch the support library source tree into `dest`, which must not exist
    fn fetch_support_library(
        &self,
        ctx: &BuildContext,
        library: &SupportLibraryConfig,
        dest: &Path,
    ) -> Result<()>;

    /// Compile `entry_point`, writing classes next to their sources
    fn compile(&self, ctx: &BuildContext, entry_point: &Path) -> Result<()>;
}

/// Runs the configured `git` and Java compiler
#[derive(Debug, Clone, Default)]
pub struct SystemToolchain {
    compiler: CompilerConfig,
    git: GitConfig,
}

impl SystemToolchain {
    pub fn new(config: &Config) -> Self {
        Self {
            compiler: config.compiler.clone(),
            git: config.git.clone(),
        }
    }

    pub fn clone_command(&self, library: &SupportLibraryConfig, dest: &Path) -> ToolCommand {
        ToolCommand::new(&self.git.command)
            .args(["clone", "--depth", "1", "--branch"])
            .arg(&library.branch)
            .arg(&library.repository)
            .arg(dest)
    }

    pub fn compile_command(&self, ctx: &BuildContext, entry_point: &Path) -> Result<ToolCommand> {
        Ok(ToolCommand::new(&self.compiler.command)
            .arg("-cp")
            .arg(ctx.classpath()?)
            .args(&self.compiler.extra_args)
            .arg(entry_point))
    }
}

impl Toolchain for SystemToolchain {
    fn fetch_support_library(
        &self,
        ctx: &BuildContext,
        library: &SupportLibraryConfig,
        dest: &Path,
    ) -> Result<()> {
        debug!(
            "Cloning support library into {} for {}",
            dest.display(),
            ctx.working_root().display()
        );
        self.clone_command(library, dest).execute()?;
        Ok(())
    }

    fn compile(&self, ctx: &BuildContext, entry_point: &Path) -> Result<()> {
        self.compile_command(ctx, entry_point)?.execute()?;
        Ok(())
    }
}
