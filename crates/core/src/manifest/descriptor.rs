//! `plugin.yml`, the descriptor the server reads from the archive root

use crate::error::Result;
use crate::types::Command;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DESCRIPTOR_FILE: &str = "plugin.yml";

/// Top-level fields of `plugin.yml`, in the order they are written
#[derive(Debug, Serialize)]
pub struct DescriptorHeader<'a> {
    pub name: &'a str,
    pub main: String,
    pub version: &'a str,
    pub author: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Serialize)]
struct CommandEntry<'a> {
    usage: &'a str,
    description: &'a str,
    aliases: &'a [String],
}

/// Handle to a `plugin.yml` this process created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorManifest {
    path: PathBuf,
}

impl DescriptorManifest {
    /// Write the header and an empty `commands:` section, replacing any
    /// existing file.
    pub fn create(plugin_root: &Path, header: &DescriptorHeader<'_>) -> Result<Self> {
        let path = plugin_root.join(DESCRIPTOR_FILE);
        let mut contents = serde_yaml::to_string(header)?;
        contents.push_str("commands:\n");
        fs::write(&path, contents)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append_command(&self, command: &Command) -> Result<()> {
        let block = render_command_block(command)?;
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(block.as_bytes())?;
        Ok(())
    }
}

/// The command's entry under `commands:`, indented one level
pub fn render_command_block(command: &Command) -> Result<String> {
    let entry = BTreeMap::from([(
        command.name.as_str(),
        CommandEntry {
            usage: &command.usage,
            description: &command.description,
            aliases: command.aliases.as_deref().unwrap_or(&[]),
        },
    )]);
    let yaml = serde_yaml::to_string(&entry)?;
    Ok(yaml.lines().map(|line| format!("  {line}\n")).collect())
}
