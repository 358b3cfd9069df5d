//! JSON plugin descriptors read by `plugsmith build`

use anyhow::{Context, Result, bail};
use plugsmith_core::{CapabilityRegistry, Command, Plugin};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PluginDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Output directory, relative to the descriptor file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub commands: Vec<CommandDescriptor>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CommandDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    /// Callback file, relative to the descriptor file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute_type: Option<String>,
}

impl PluginDescriptor {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read descriptor {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse descriptor {}", path.display()))
    }

    /// Describe the plugin and register every command.
    ///
    /// Relative paths resolve against `base_dir`. Registering writes the
    /// project skeleton and `plugin.yml` under the output directory.
    pub fn into_plugin(self, base_dir: &Path, registry: &CapabilityRegistry) -> Result<Plugin> {
        let mut builder = Plugin::builder(&self.name)
            .with_path(base_dir.join(self.path.unwrap_or_else(|| PathBuf::from("."))));
        if let Some(package) = self.package {
            builder = builder.with_package(package);
        }
        if let Some(description) = self.description {
            builder = builder.with_description(description);
        }
        if let Some(author) = self.author {
            builder = builder.with_author(author);
        }
        if let Some(version) = self.version {
            builder = builder.with_version(version);
        }
        let mut plugin = builder
            .build()
            .with_context(|| format!("Invalid plugin '{}'", self.name))?;

        for descriptor in self.commands {
            let name = descriptor.name.clone();
            let command = descriptor
                .into_command(base_dir, registry)
                .with_context(|| format!("Invalid command '{name}'"))?;
            plugin
                .add_command(command)
                .with_context(|| format!("Failed to register command '{name}'"))?;
        }

        Ok(plugin)
    }
}

impl CommandDescriptor {
    pub fn into_command(self, base_dir: &Path, registry: &CapabilityRegistry) -> Result<Command> {
        let mut command = Command::new(self.name);
        if let Some(usage) = self.usage {
            command = command.with_usage(usage);
        }
        if let Some(description) = self.description {
            command = command.with_description(description);
        }
        if let Some(aliases) = self.aliases {
            command = command.with_aliases(aliases);
        }

        let source = match (self.handler, self.handler_source) {
            (Some(_), Some(_)) => bail!("set either 'handler' or 'handler_source', not both"),
            (Some(file), None) => {
                let file = base_dir.join(file);
                debug!("Reading handler {}", file.display());
                Some(
                    fs::read_to_string(&file)
                        .with_context(|| format!("Failed to read handler {}", file.display()))?,
                )
            }
            (None, source) => source,
        };

        if let Some(source) = source {
            command.on_use(&source)?;
        }
        if let Some(tag) = self.execute_type {
            command.execute_type(&tag, registry)?;
        }

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HANDLER: &str = "(sender, cmd, label, args) => {\n    sender.sendMessage('hi')\n}";

    #[test]
    fn test_descriptor_defaults() {
        let descriptor: PluginDescriptor =
            serde_json::from_str(r#"{ "name": "Demo", "commands": [{ "name": "hi" }] }"#)
                .unwrap();
        assert!(descriptor.package.is_none());
        assert_eq!(descriptor.commands[0].name, "hi");
    }

    #[test]
    fn test_into_plugin_resolves_paths_against_descriptor_dir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("handlers")).unwrap();
        fs::write(dir.path().join("handlers/hi.js"), HANDLER).unwrap();

        let descriptor = PluginDescriptor {
            name: "My Plugin".to_string(),
            author: Some("alex".to_string()),
            path: Some(PathBuf::from("out")),
            commands: vec![CommandDescriptor {
                name: "hi".to_string(),
                handler: Some(PathBuf::from("handlers/hi.js")),
                execute_type: Some("player".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let plugin = descriptor
            .into_plugin(dir.path(), &CapabilityRegistry::default())
            .unwrap();

        assert_eq!(plugin.name(), "My_Plugin");
        assert_eq!(plugin.author(), "alex");
        assert_eq!(plugin.plugin_root(), dir.path().join("out").join("My_Plugin"));
        assert!(plugin.plugin_root().join("plugin.yml").is_file());
        let body = &plugin.commands()[0].trigger().unwrap().handler.body;
        assert!(body.contains("instanceof Player"));
    }

    #[test]
    fn test_handler_and_inline_source_conflict() {
        let dir = TempDir::new().unwrap();
        let command = CommandDescriptor {
            name: "hi".to_string(),
            handler: Some(PathBuf::from("hi.js")),
            handler_source: Some(HANDLER.to_string()),
            ..Default::default()
        };
        let err = command
            .into_command(dir.path(), &CapabilityRegistry::default())
            .unwrap_err();
        assert!(err.to_string().contains("not both"));
    }

    #[test]
    fn test_guard_without_handler_fails() {
        let dir = TempDir::new().unwrap();
        let command = CommandDescriptor {
            name: "hi".to_string(),
            execute_type: Some("player".to_string()),
            ..Default::default()
        };
        let err = command
            .into_command(dir.path(), &CapabilityRegistry::default())
            .unwrap_err();
        assert!(err.to_string().contains("no handler"));
    }
}
