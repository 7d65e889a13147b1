//! Application services - orchestrate use cases.
//!
//! `ProjectAssembler` runs the six create/add operations; `ManifestMutator`
//! is the in-place editor it uses for the top-level build descriptor.

pub mod manifest_mutator;
pub mod project_assembler;

pub use manifest_mutator::ManifestMutator;
pub use project_assembler::{AssemblyReport, ProjectAssembler};
