#![allow(dead_code)]

use plugsmith_core::config::SupportLibraryConfig;
use plugsmith_core::{BuildContext, Error, Result, Toolchain};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Stands in for `git` and `javac`: writes a tiny library checkout and turns
/// every `.java` file under the plugin root into a `.class` file.
#[derive(Default)]
pub struct FakeToolchain {
    pub fetches: RefCell<Vec<PathBuf>>,
    pub compiled: RefCell<Vec<PathBuf>>,
    pub compile_error: Option<String>,
}

impl FakeToolchain {
    pub fn failing(stderr: &str) -> Self {
        Self {
            compile_error: Some(stderr.to_string()),
            ..Default::default()
        }
    }
}

impl Toolchain for FakeToolchain {
    fn fetch_support_library(
        &self,
        _ctx: &BuildContext,
        library: &SupportLibraryConfig,
        dest: &Path,
    ) -> Result<()> {
        self.fetches.borrow_mut().push(dest.to_path_buf());
        let lib = dest.join(&library.directory).join("ephf");
        fs::create_dir_all(&lib)?;
        fs::create_dir_all(dest.join(".git"))?;
        fs::write(dest.join("README.md"), "# plug-org")?;
        fs::write(lib.join("Util.java"), "package org.ephf; public class Util {}")?;
        Ok(())
    }

    fn compile(&self, ctx: &BuildContext, entry_point: &Path) -> Result<()> {
        self.compiled.borrow_mut().push(entry_point.to_path_buf());
        if let Some(stderr) = &self.compile_error {
            return Err(Error::ExternalTool {
                tool: "javac".to_string(),
                status: "exit status: 1".to_string(),
                stderr: stderr.clone(),
            });
        }

        for entry in WalkDir::new(ctx.plugin_root()) {
            let entry = entry.unwrap();
            if entry.path().extension().and_then(|e| e.to_str()) == Some("java") {
                fs::write(entry.path().with_extension("class"), [0xCA, 0xFE, 0xBA, 0xBE])?;
            }
        }
        Ok(())
    }
}

pub const GREETING_HANDLER: &str = "(sender, cmd, label, args) => {
    let greeting = 'hi';
    sender.sendMessage(greeting);
}";
