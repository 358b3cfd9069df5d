use super::context::BuildContext;
use super::toolchain::Toolchain;
use crate::config::SupportLibraryConfig;
use crate::error::{Error, Result};
use crate::utils::fs::remove_path;
use std::fs;
use tracing::{debug, info};

/// Make the support library available at the context's cache path.
///
/// Reuses the cache when present, restores a copy an interrupted build left
/// in the plugin root, and otherwise fetches it once into a scratch directory
/// and moves the pruned library into the cache.
pub fn ensure_support_library<T: Toolchain + ?Sized>(
    toolchain: &T,
    ctx: &BuildContext,
    library: &SupportLibraryConfig,
) -> Result<()> {
    if ctx.cache_path().is_dir() {
        debug!("Using cached support library at {}", ctx.cache_path().display());
        return Ok(());
    }

    if let Some(stray) = ctx.stray_library_path().filter(|p| p.is_dir()) {
        info!("Restoring support library from {}", stray.display());
        fs::rename(stray, ctx.cache_path())?;
        return Ok(());
    }

    let scratch = tempfile::Builder::new()
        .prefix(".plugsmith-fetch-")
        .tempdir_in(ctx.working_root())?;
    let checkout = scratch.path().join("checkout");
    toolchain.fetch_support_library(ctx, library, &checkout)?;

    for entry in &library.prune {
        remove_path(&checkout.join(entry))?;
    }

    let fetched = checkout.join(&library.directory);
    if !fetched.is_dir() {
        return Err(Error::Other(format!(
            "{} does not contain a '{}' directory",
            library.repository, library.directory
        )));
    }

    fs::rename(&fetched, ctx.cache_path())?;
    info!("Cached support library at {}", ctx.cache_path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Plugin;
    use std::cell::Cell;
    use std::path::Path;
    use tempfile::TempDir;

    #[derive(Default)]
    struct FakeGit {
        fetches: Cell<usize>,
        layout_dir: Option<&'static str>,
    }

    impl Toolchain for FakeGit {
        fn fetch_support_library(
            &self,
            _ctx: &BuildContext,
            _library: &SupportLibraryConfig,
            dest: &Path,
        ) -> Result<()> {
            self.fetches.set(self.fetches.get() + 1);
            let lib = dest.join(self.layout_dir.unwrap_or("org"));
            fs::create_dir_all(lib.join("ephf"))?;
            fs::create_dir_all(dest.join(".git"))?;
            fs::write(dest.join("README.md"), "readme")?;
            fs::write(lib.join("ephf").join("Util.java"), "class Util {}")?;
            Ok(())
        }

        fn compile(&self, _ctx: &BuildContext, _entry_point: &Path) -> Result<()> {
            Ok(())
        }
    }

    fn context(dir: &TempDir) -> BuildContext {
        let plugin = Plugin::builder("Demo").with_path(dir.path()).build().unwrap();
        BuildContext::new(&plugin, &SupportLibraryConfig::default()).unwrap()
    }

    #[test]
    fn test_fetches_once_then_uses_cache() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        let git = FakeGit::default();
        let library = SupportLibraryConfig::default();

        ensure_support_library(&git, &ctx, &library).unwrap();
        ensure_support_library(&git, &ctx, &library).unwrap();

        assert_eq!(git.fetches.get(), 1);
        assert!(ctx.cache_path().join("ephf").join("Util.java").is_file());
        // Only the cache and nothing from the scratch checkout is left behind
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("org")]);
    }

    #[test]
    fn test_restores_stray_library() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        let stray = ctx.stray_library_path().unwrap().to_path_buf();
        fs::create_dir_all(stray.join("ephf")).unwrap();
        let git = FakeGit::default();

        ensure_support_library(&git, &ctx, &SupportLibraryConfig::default()).unwrap();

        assert_eq!(git.fetches.get(), 0);
        assert!(ctx.cache_path().join("ephf").is_dir());
        assert!(!stray.exists());
    }

    #[test]
    fn test_missing_library_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        let git = FakeGit {
            layout_dir: Some("src"),
            ..Default::default()
        };

        let err = ensure_support_library(&git, &ctx, &SupportLibraryConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Other(_)));
        assert!(!ctx.cache_path().exists());
    }
}
