use crate::config::ArchiveCompression;
use crate::error::Result;
use std::fs;
use std::io::{self, Cursor, Write};
use std::path::Path;
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// In-memory zip archive, flushed to disk by the caller
pub struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl ArchiveBuilder {
    pub fn new(compression: ArchiveCompression) -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default().compression_method(compression.into()),
        }
    }

    /// Add the file at `source` as `name`
    pub fn add_file(&mut self, source: &Path, name: &str) -> Result<()> {
        let contents = fs::read(source)?;
        self.writer.start_file(name, self.options)?;
        self.writer.write_all(&contents)?;
        Ok(())
    }

    /// Add `source` and everything below it under `prefix`, in sorted order
    pub fn add_directory(&mut self, source: &Path, prefix: &str) -> Result<()> {
        for entry in WalkDir::new(source).sort_by_file_name() {
            let entry = entry.map_err(io::Error::from)?;
            let relative = entry
                .path()
                .strip_prefix(source)
                .map_err(|e| io::Error::other(e.to_string()))?;

            let mut name = prefix.trim_end_matches('/').to_string();
            for component in relative.components() {
                name.push('/');
                name.push_str(&component.as_os_str().to_string_lossy());
            }

            if entry.file_type().is_dir() {
                self.writer.add_directory(format!("{name}/"), self.options)?;
            } else if entry.file_type().is_file() {
                self.add_file(entry.path(), &name)?;
            }
        }
        Ok(())
    }

    pub fn finish(self) -> Result<Vec<u8>> {
        Ok(self.writer.finish()?.into_inner())
    }
}
