use crate::error::Result;
use crate::utils::fs::ensure_dir;
use std::path::{Path, PathBuf};

pub const META_INF_DIR: &str = "META-INF";
pub const BUILD_MANIFEST_FILE: &str = "MANIFEST.MF";

pub fn render_build_manifest(main_class: &str) -> String {
    format!("Manifest-Version: 1.0\nMain-Class: {main_class}\n")
}

/// Write `META-INF/MANIFEST.MF` under `plugin_root`
pub fn write_build_manifest(plugin_root: &Path, main_class: &str) -> Result<PathBuf> {
    let dir = plugin_root.join(META_INF_DIR);
    ensure_dir(&dir)?;
    let path = dir.join(BUILD_MANIFEST_FILE);
    std::fs::write(&path, render_build_manifest(main_class))?;
    Ok(path)
}
