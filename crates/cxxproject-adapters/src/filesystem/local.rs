//! Local filesystem adapter using std::fs.

use std::io::{self, Write};
use std::path::Path;

use cxxproject_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CoreError, CoreResult},
};
use tempfile::NamedTempFile;
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write"))
    }

    fn read_to_string(&self, path: &Path) -> CoreResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read"))
    }

    /// Write a sibling temporary file completely, then rename it over `path`.
    fn replace_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)
            .map_err(|e| map_io_error(dir, e, "create temporary file in"))?;
        tmp.write_all(content.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| map_io_error(tmp.path(), e, "write"))?;
        trace!(tmp = %tmp.path().display(), "Renaming over original");
        tmp.persist(path)
            .map_err(|e| map_io_error(path, e.error, "replace"))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> CoreError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        operation,
        reason: e.to_string(),
    }
    .into()
}
