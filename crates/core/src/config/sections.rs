use crate::impl_case_insensitive_deserialize;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPILER: &str = "javac";
pub const DEFAULT_GIT: &str = "git";
pub const DEFAULT_LIBRARY_REPOSITORY: &str = "https://github.com/ephf/plug-org.git";
pub const DEFAULT_LIBRARY_BRANCH: &str = "main";
pub const DEFAULT_LIBRARY_DIRECTORY: &str = "org";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct CompilerConfig {
    pub command: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_args: Vec<String>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMPILER.to_string(),
            extra_args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct GitConfig {
    pub command: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_GIT.to_string(),
        }
    }
}

/// Where the vendored support library comes from and what to strip from the
/// clone before caching it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SupportLibraryConfig {
    pub repository: String,
    pub branch: String,
    /// Directory name inside the clone, also used as the cache name
    pub directory: String,
    pub prune: Vec<String>,
}

impl Default for SupportLibraryConfig {
    fn default() -> Self {
        Self {
            repository: DEFAULT_LIBRARY_REPOSITORY.to_string(),
            branch: DEFAULT_LIBRARY_BRANCH.to_string(),
            directory: DEFAULT_LIBRARY_DIRECTORY.to_string(),
            prune: vec![".git".to_string(), "README.md".to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchiveCompression {
    #[default]
    Deflated,
    Stored,
}

impl_case_insensitive_deserialize!(
    ArchiveCompression,
    Deflated => "deflated",
    Stored => "stored"
);

impl From<ArchiveCompression> for zip::CompressionMethod {
    fn from(value: ArchiveCompression) -> Self {
        match value {
            ArchiveCompression::Deflated => zip::CompressionMethod::Deflated,
            ArchiveCompression::Stored => zip::CompressionMethod::Stored,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct ArchiveConfig {
    pub compression: ArchiveCompression,
}
