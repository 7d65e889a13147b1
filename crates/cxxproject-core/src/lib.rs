//! cxxproject Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the cxxproject
//! scaffolder, which generates and extends CMake C++ projects.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           cxxproject-cli (CLI)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ProjectAssembler, ManifestMutator)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Filesystem, VersionControl)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    cxxproject-adapters (Infrastructure) │
//! │  (LocalFilesystem, GitCli, in-memory)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (catalog, blueprints, manifest splice)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cxxproject_core::prelude::*;
//!
//! let assembler = ProjectAssembler::new(filesystem, vcs, ProjectContext::new("."));
//! assembler.create_library("mylib")?;
//! assembler.add_tests("integration")?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, AssemblyReport, ManifestMutator, ProjectAssembler,
        ports::{Filesystem, VersionControl},
    };
    pub use crate::domain::{
        BuildSettings, DomainError, GeneratedFileSet, InsertionPoint, ProjectContext,
        ProjectKind, ProjectLayout, ProjectName, ReleaseSettings,
    };
    pub use crate::error::{CoreError, CoreResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
