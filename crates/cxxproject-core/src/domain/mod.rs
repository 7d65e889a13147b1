// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for cxxproject.
//!
//! Pure logic: names, project kinds, the layout context, the template
//! catalog, per-kind blueprints and the manifest splice. Filesystem and
//! version-control access happen through the ports in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: no filesystem, process or network calls
//! - **Few crates**: std, thiserror, serde (settings) and rand (guard tokens)
//! - **Immutable values**: every domain object is Clone + PartialEq
pub mod blueprint;
pub mod catalog;
pub mod entities;
pub mod error;
pub mod manifest;
pub mod value_objects;

mod validation;

pub use blueprint::{blueprint, root_staging_paths};
pub use entities::{
    context::{BuildSettings, ProjectContext, ProjectLayout, ReleaseSettings},
    file_set::{DirectoryToCreate, FileToWrite, FsEntry, GeneratedFileSet, WritePolicy},
    render_context::RenderContext,
};
pub use error::{DomainError, ErrorCategory};
pub use manifest::{InsertionPoint, Splice};
pub use validation::DomainValidator;
pub use value_objects::{IncludeGuardToken, ProjectKind, ProjectName};
