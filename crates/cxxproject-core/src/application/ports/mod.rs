//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `cxxproject-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the assembler, implemented by
//!   infrastructure
//!   - `Filesystem`: directory and file operations
//!   - `VersionControl`: init/add/commit/tag/submodule commands
//!
//! - **Driving (Input) Ports**: the CLI calls `ProjectAssembler` directly.

pub mod output;

pub use output::{Filesystem, VersionControl};

#[cfg(test)]
pub use output::{MockFilesystem, MockVersionControl};
