//! Manifests written into the plugin project

mod build_manifest;
mod descriptor;

pub use build_manifest::{
    BUILD_MANIFEST_FILE, META_INF_DIR, render_build_manifest, write_build_manifest,
};
pub use descriptor::{DESCRIPTOR_FILE, DescriptorHeader, DescriptorManifest, render_command_block};
