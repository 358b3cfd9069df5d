use super::archive::ArchiveBuilder;
use super::context::BuildContext;
use super::support_library::ensure_support_library;
use super::toolchain::{SystemToolchain, Toolchain};
use crate::codegen::{render_command_source, render_entry_point};
use crate::config::Config;
use crate::error::Result;
use crate::manifest::{DESCRIPTOR_FILE, META_INF_DIR, write_build_manifest};
use crate::types::Plugin;
use crate::utils::fs::{ensure_dir, remove_files_with_extension, remove_path};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// The packaged plugin written by a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifact {
    pub path: PathBuf,
    pub size: usize,
    /// Command classes instantiated by the entry point
    pub registered_commands: Vec<String>,
}

/// Turns a fully described [`Plugin`] into `<name>.jar`.
///
/// Steps run in order and stop at the first error. Nothing is rolled back, so
/// a failed build can leave the intermediate project directory behind.
pub struct AssemblyPipeline<T: Toolchain = SystemToolchain> {
    config: Config,
    toolchain: T,
}

impl AssemblyPipeline<SystemToolchain> {
    pub fn new(config: Config) -> Self {
        let toolchain = SystemToolchain::new(&config);
        Self { config, toolchain }
    }
}

impl<T: Toolchain> AssemblyPipeline<T> {
    pub fn with_toolchain(config: Config, toolchain: T) -> Self {
        Self { config, toolchain }
    }

    pub fn toolchain(&self) -> &T {
        &self.toolchain
    }

    pub fn run(&self, mut plugin: Plugin) -> Result<BuildArtifact> {
        let ctx = BuildContext::new(&plugin, &self.config.support_library)?;
        info!(
            "Building {} ({} commands)",
            plugin.name(),
            plugin.commands().len()
        );

        debug!("Preparing project at {}", ctx.plugin_root().display());
        plugin.ensure_project()?;
        ensure_dir(&plugin.commands_dir())?;

        ensure_support_library(&self.toolchain, &ctx, &self.config.support_library)?;

        let mut registered_commands = Vec::new();
        for command in plugin.commands() {
            let Some(trigger) = command.trigger() else {
                debug!("Skipping source for handlerless command '{}'", command.name);
                continue;
            };
            let path = plugin.commands_dir().join(format!("{}.java", command.name));
            debug!("Writing {}", path.display());
            fs::write(&path, render_command_source(trigger))?;
            registered_commands.push(command.name.clone());
        }

        let entry_point = plugin.entry_point_path();
        debug!("Writing {}", entry_point.display());
        fs::write(
            &entry_point,
            render_entry_point(plugin.entry_point(), &registered_commands),
        )?;

        write_build_manifest(ctx.plugin_root(), &plugin.main_class())?;

        debug!("Compiling {}", entry_point.display());
        self.toolchain.compile(&ctx, &entry_point)?;

        let removed = remove_files_with_extension(&plugin.source_root(), "java")?;
        debug!("Removed {removed} source files");

        // The library was compiled in place from the cache; nothing to move back
        debug!("Releasing support library at {}", ctx.cache_path().display());

        let mut archive = ArchiveBuilder::new(self.config.archive.compression);
        archive.add_directory(&ctx.plugin_root().join(META_INF_DIR), META_INF_DIR)?;
        archive.add_file(&ctx.plugin_root().join(DESCRIPTOR_FILE), DESCRIPTOR_FILE)?;
        archive.add_directory(&plugin.source_root(), plugin.package_root_segment())?;
        let bytes = archive.finish()?;

        let path = ctx.working_root().join(plugin.archive_name());
        fs::write(&path, &bytes)?;
        info!("Wrote {} ({} bytes)", path.display(), bytes.len());

        debug!("Removing {}", ctx.plugin_root().display());
        remove_path(ctx.plugin_root())?;

        if let Some(schedule) = plugin.take_schedule() {
            schedule.cancel();
        }

        Ok(BuildArtifact {
            path,
            size: bytes.len(),
            registered_commands,
        })
    }
}
