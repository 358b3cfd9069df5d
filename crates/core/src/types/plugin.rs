use super::command::Command;
use crate::config::DEFAULT_LIBRARY_DIRECTORY;
use crate::error::{Error, Result};
use crate::manifest::{DescriptorHeader, DescriptorManifest};
use crate::trigger::CancelHandle;
use crate::utils::fs::ensure_dir;
use crate::utils::{validate_identifier, validate_qualified_name};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_PACKAGE: &str = "com";
pub const DEFAULT_PLUGIN_DESCRIPTION: &str = "this plugin has no description";
pub const DEFAULT_AUTHOR: &str = "unknown";
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_PATH: &str = "./";

/// Simple name of the generated entry-point class
pub const ENTRY_POINT_CLASS: &str = "Plugin";

pub const ENTRY_POINT_IMPORTS: [&str; 2] = ["org.bukkit.Bukkit", "org.bukkit.plugin.java.JavaPlugin"];

/// Generated metadata for the class wired into `onEnable`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    pub package: String,
    pub imports: Vec<String>,
    pub class_header: String,
}

#[derive(Debug, Clone)]
pub struct PluginBuilder {
    name: String,
    package: String,
    description: String,
    author: String,
    version: String,
    path: PathBuf,
}

impl PluginBuilder {
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Directory the plugin project and the finished archive are written to
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn build(self) -> Result<Plugin> {
        validate_identifier(&self.name)?;
        validate_qualified_name(&self.package)?;
        // The project directory would land on the cached support library
        if self.name == DEFAULT_LIBRARY_DIRECTORY {
            return Err(Error::LibraryNameCollision(self.name));
        }

        let qualified = format!("{}.{}", self.package, self.name);
        Ok(Plugin {
            entry_point: EntryPoint {
                package: qualified,
                imports: ENTRY_POINT_IMPORTS.iter().map(|i| i.to_string()).collect(),
                class_header: format!("public class {ENTRY_POINT_CLASS} extends JavaPlugin"),
            },
            name: self.name,
            package: self.package,
            description: self.description,
            author: self.author,
            version: self.version,
            path: self.path,
            commands: Vec::new(),
            command_classes: Vec::new(),
            manifest: None,
            schedule: None,
        })
    }
}

/// A plugin being described: metadata, registered commands and the project
/// tree they are written to.
#[derive(Debug)]
pub struct Plugin {
    name: String,
    package: String,
    description: String,
    author: String,
    version: String,
    path: PathBuf,
    commands: Vec<Command>,
    command_classes: Vec<String>,
    entry_point: EntryPoint,
    manifest: Option<DescriptorManifest>,
    schedule: Option<CancelHandle>,
}

impl Plugin {
    /// Start describing a plugin. Spaces in `name` become underscores.
    pub fn builder(name: &str) -> PluginBuilder {
        PluginBuilder {
            name: sanitize_name(name),
            package: DEFAULT_PACKAGE.to_string(),
            description: DEFAULT_PLUGIN_DESCRIPTION.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            version: DEFAULT_VERSION.to_string(),
            path: PathBuf::from(DEFAULT_PATH),
        }
    }

    pub fn new(name: &str) -> Result<Self> {
        Self::builder(name).build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Generated command class names, in registration order
    pub fn command_classes(&self) -> &[String] {
        &self.command_classes
    }

    pub fn entry_point(&self) -> &EntryPoint {
        &self.entry_point
    }

    /// `<package>.<name>`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package, self.name)
    }

    /// Fully qualified name of the entry-point class
    pub fn main_class(&self) -> String {
        format!("{}.{ENTRY_POINT_CLASS}", self.qualified_name())
    }

    /// `<path>/<name>`: the intermediate project directory
    pub fn plugin_root(&self) -> PathBuf {
        self.path.join(&self.name)
    }

    /// Top-level directory of the package tree inside the plugin root
    pub fn package_root_segment(&self) -> &str {
        self.package.split('.').next().unwrap_or(&self.package)
    }

    pub fn source_root(&self) -> PathBuf {
        self.plugin_root().join(self.package_root_segment())
    }

    /// Directory holding `Plugin.java`
    pub fn package_dir(&self) -> PathBuf {
        let mut dir = self.plugin_root();
        dir.extend(self.package.split('.'));
        dir.join(&self.name)
    }

    pub fn commands_dir(&self) -> PathBuf {
        self.package_dir().join("commands")
    }

    pub fn entry_point_path(&self) -> PathBuf {
        self.package_dir().join(format!("{ENTRY_POINT_CLASS}.java"))
    }

    /// File name of the packaged artifact
    pub fn archive_name(&self) -> String {
        format!("{}.jar", self.name)
    }

    pub fn manifest(&self) -> Option<&DescriptorManifest> {
        self.manifest.as_ref()
    }

    /// Create the project skeleton and the initial `plugin.yml` if this
    /// plugin has not written them yet.
    pub fn ensure_project(&mut self) -> Result<()> {
        ensure_dir(&self.package_dir())?;
        if self.manifest.is_none() {
            debug!("Writing descriptor manifest for {}", self.name);
            let header = DescriptorHeader {
                name: &self.name,
                main: self.main_class(),
                version: &self.version,
                author: &self.author,
                description: &self.description,
            };
            self.manifest = Some(DescriptorManifest::create(&self.plugin_root(), &header)?);
        }
        Ok(())
    }

    /// Register a command.
    ///
    /// The command's block is appended to `plugin.yml` on disk immediately. A
    /// class name that is already registered is rejected before anything is
    /// written.
    pub fn add_command(&mut self, mut command: Command) -> Result<()> {
        validate_identifier(&command.name)?;
        if self.command_classes.contains(&command.name) {
            return Err(Error::DuplicateCommand(command.name));
        }

        self.ensure_project()?;

        let qualified = self.qualified_name();
        match command.trigger_mut() {
            Some(trigger) => {
                trigger.stamp(&qualified);
                self.entry_point
                    .imports
                    .push(format!("{qualified}.commands.{}", command.name));
            }
            None => warn!(
                "Command '{}' has no handler; it will not be compiled or registered",
                command.name
            ),
        }

        if let Some(manifest) = &self.manifest {
            manifest.append_command(&command)?;
        }

        debug!("Registered command '{}' on {}", command.name, self.name);
        self.command_classes.push(command.name.clone());
        self.commands.push(command);
        Ok(())
    }

    pub(crate) fn attach_schedule(&mut self, handle: CancelHandle) {
        self.schedule = Some(handle);
    }

    pub(crate) fn take_schedule(&mut self) -> Option<CancelHandle> {
        self.schedule.take()
    }
}

fn sanitize_name(name: &str) -> String {
    name.replace(' ', "_")
}
