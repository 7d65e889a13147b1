//! Application layer for cxxproject.
//!
//! This layer contains:
//! - **Services**: use case orchestration (ProjectAssembler, ManifestMutator)
//! - **Ports**: interface definitions (traits) for the filesystem and the
//!   version-control tool
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! content decisions itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{AssemblyReport, ManifestMutator, ProjectAssembler};

pub use ports::{Filesystem, VersionControl};

pub use error::ApplicationError;
