use anyhow::{Context, Result};
use plugsmith_core::{AssemblyPipeline, CapabilityRegistry, Config};
use std::path::Path;
use tracing::{debug, info};

use crate::descriptor::PluginDescriptor;
use crate::display::print_artifact;

pub fn build_command(descriptor: &str, config_path: Option<&str>) -> Result<()> {
    let descriptor_path = Path::new(descriptor)
        .canonicalize()
        .with_context(|| format!("Descriptor not found: {descriptor}"))?;
    let base_dir = descriptor_path
        .parent()
        .context("Descriptor has no parent directory")?;

    let config = match config_path {
        Some(path) => Config::load_from_file(Path::new(path))
            .with_context(|| format!("Failed to load config {path}"))?,
        None => Config::load(base_dir).context("Failed to load config")?,
    };
    debug!("Using config: {:?}", config);

    let registry = CapabilityRegistry::from_config(&config);
    let plugin = PluginDescriptor::load(&descriptor_path)?.into_plugin(base_dir, &registry)?;

    println!(
        "🔨 Building {} with {} command(s)",
        plugin.name(),
        plugin.commands().len()
    );
    info!("Output directory: {}", plugin.path().display());

    let artifact = AssemblyPipeline::new(config)
        .run(plugin)
        .context("Build failed")?;
    print_artifact(&artifact);
    Ok(())
}
