//! Infrastructure adapters for cxxproject.
//!
//! This crate implements the ports defined in
//! `cxxproject_core::application::ports`. All I/O lives here: `std::fs` and
//! `tempfile` for files, `std::process` for the `git` executable.

pub mod filesystem;
pub mod vcs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use vcs::{GitCli, RecordingVcs};
