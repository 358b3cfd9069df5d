use crate::config::SupportLibraryConfig;
use crate::error::{Error, Result};
use crate::types::Plugin;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Locations one build works with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    working_root: PathBuf,
    plugin_root: PathBuf,
    cache_path: PathBuf,
    stray_library_path: Option<PathBuf>,
}

impl BuildContext {
    /// Fails with [`Error::LibraryNameCollision`] when the plugin's project
    /// directory would be the support library cache.
    pub fn new(plugin: &Plugin, library: &SupportLibraryConfig) -> Result<Self> {
        if plugin.name() == library.directory {
            return Err(Error::LibraryNameCollision(plugin.name().to_string()));
        }

        let working_root = plugin.path().to_path_buf();
        let plugin_root = plugin.plugin_root();
        // A package rooted at the library's name owns that directory
        let stray_library_path = (plugin.package_root_segment() != library.directory)
            .then(|| plugin_root.join(&library.directory));
        Ok(Self {
            cache_path: working_root.join(&library.directory),
            stray_library_path,
            working_root,
            plugin_root,
        })
    }

    /// Directory the archive is written to and the support library is cached in
    pub fn working_root(&self) -> &Path {
        &self.working_root
    }

    pub fn plugin_root(&self) -> &Path {
        &self.plugin_root
    }

    /// Cached support library, shared by every build from this working root
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Where an interrupted build may have left the support library
    pub fn stray_library_path(&self) -> Option<&Path> {
        self.stray_library_path.as_deref()
    }

    /// Compiler classpath: the plugin root, then the working root holding the
    /// cached library
    pub fn classpath(&self) -> Result<OsString> {
        std::env::join_paths([&self.plugin_root, &self.working_root])
            .map_err(|e| Error::Other(format!("Cannot build classpath: {e}")))
    }
}
