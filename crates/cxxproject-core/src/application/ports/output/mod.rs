//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the assembler needs from external systems.
//! The `cxxproject-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::CoreResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `cxxproject_adapters::filesystem::LocalFilesystem` (production)
/// - `cxxproject_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are passed as the assembler resolved them against the project root.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    /// Write the full content of a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;

    fn read_to_string(&self, path: &Path) -> CoreResult<String>;

    /// Replace an existing file so that readers see either the old or the new
    /// content, never a partial write.
    fn replace_file(&self, path: &Path, content: &str) -> CoreResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the version-control tool.
///
/// Only the exit status matters; output is never parsed. Paths are relative
/// to the repository root.
///
/// Implemented by:
/// - `cxxproject_adapters::vcs::GitCli` (production)
/// - `cxxproject_adapters::vcs::RecordingVcs` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    fn init(&self) -> CoreResult<()>;

    /// Stage the given paths.
    fn add(&self, paths: &[PathBuf]) -> CoreResult<()>;

    fn commit(&self, message: &str) -> CoreResult<()>;

    fn tag(&self, name: &str) -> CoreResult<()>;

    /// Register `url` as a submodule checked out at `path`, optionally pinned
    /// to `branch`.
    fn submodule_add(&self, url: &str, path: &Path, branch: Option<String>) -> CoreResult<()>;

    /// Initialise and fetch the submodule at `path`, recursively.
    fn submodule_update(&self, path: &Path) -> CoreResult<()>;
}
