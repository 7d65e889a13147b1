//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Name and precondition errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while assembling a project.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The sub-project directory is already there.
    #[error("Target already exists: {path}")]
    TargetExists { path: PathBuf },

    /// A filesystem call failed.
    #[error("Cannot {operation} {path}: {reason}")]
    FilesystemError {
        path: PathBuf,
        operation: &'static str,
        reason: String,
    },

    /// An external command could not be started or exited non-zero.
    #[error("Command failed: {command}: {reason}")]
    CommandFailed { command: String, reason: String },

    /// `add` was run outside a generated project.
    #[error("No top-level build descriptor at {path}")]
    ManifestMissing { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TargetExists { path } => vec![
                format!("'{}' is already present", path.display()),
                "Choose a different name or remove the directory first".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::CommandFailed { .. } => vec![
                "Check that git is installed and on PATH".into(),
                "Files written before the failure are left on disk; inspect with `git status`"
                    .into(),
            ],
            Self::ManifestMissing { .. } => vec![
                "Run `add` from the root of a generated project".into(),
                "Or pass the project root with -C <DIR>".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TargetExists { .. } | Self::ManifestMissing { .. } => ErrorCategory::Precondition,
            Self::FilesystemError { .. } => ErrorCategory::Io,
            Self::CommandFailed { .. } => ErrorCategory::ExternalCommand,
        }
    }
}
