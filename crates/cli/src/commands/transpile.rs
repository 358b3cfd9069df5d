use anyhow::{Context, Result};
use plugsmith_core::{CapabilityRegistry, Command, Config};
use std::{env, fs, path::Path};

use crate::display::format_method;

pub fn transpile_command(file: &str, guard: Option<&str>, name: Option<&str>) -> Result<()> {
    let path = Path::new(file);
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read callback {file}"))?;

    let name = match name {
        Some(name) => name.to_string(),
        None => path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("command")
            .to_string(),
    };

    let mut command = Command::new(name);
    command
        .on_use(&source)
        .with_context(|| format!("Failed to transpile {file}"))?;

    if let Some(tag) = guard {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        let config = Config::load(&cwd).context("Failed to load config")?;
        command.execute_type(tag, &CapabilityRegistry::from_config(&config))?;
    }

    if let Some(trigger) = command.trigger() {
        println!("{}", format_method(&trigger.handler));
    }
    Ok(())
}
